//! App-level components: layout, navigation, the scene canvas and the
//! route guard. Plain widgets live in `arcana-ui`.

mod layout;
mod nav_header;
mod private_route;
mod scene_canvas;

pub use layout::MainLayout;
pub use nav_header::{NavHeader, NavLocation};
pub use private_route::PrivateRoute;
pub use scene_canvas::{load_texture, SceneCanvas};
