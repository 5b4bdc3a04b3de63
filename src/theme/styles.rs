//! Global CSS styles for Arcana.
//!
//! Dark theme by default; `.theme-light` on the app root swaps the
//! custom properties.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0f0c29;
  --night-mid: #302b63;
  --night-edge: #24243e;
  --glass: rgba(255, 255, 255, 0.08);
  --glass-border: rgba(255, 255, 255, 0.14);

  /* AMETHYST (Interactive) */
  --amethyst: #9c88ff;
  --amethyst-deep: #8c7ae6;
  --amethyst-glow: rgba(156, 136, 255, 0.35);

  /* GOLD (Titles, Sacred) */
  --gold: #e6c67a;
  --gold-bright: #f5b833;
  --gold-glow: rgba(245, 184, 51, 0.3);

  /* TEXT */
  --text-primary: #f5f3ff;
  --text-secondary: rgba(245, 243, 255, 0.75);
  --text-muted: rgba(245, 243, 255, 0.5);

  /* SEMANTIC */
  --danger: #ff6b81;
  --success: #7bed9f;

  /* Typography */
  --font-display: 'Cinzel', Georgia, serif;
  --font-body: 'Cormorant Garamond', Georgia, serif;
  --font-ui: 'Inter', system-ui, sans-serif;

  --radius: 14px;
  --transition: 0.2s ease;
}

.theme-light {
  --night: #f3efff;
  --night-mid: #e2dafc;
  --night-edge: #d6ccf7;
  --glass: rgba(255, 255, 255, 0.6);
  --glass-border: rgba(48, 43, 99, 0.15);
  --text-primary: #241f4a;
  --text-secondary: rgba(36, 31, 74, 0.75);
  --text-muted: rgba(36, 31, 74, 0.5);
  --gold: #a77b15;
}

/* === Base === */
* { box-sizing: border-box; }

html, body {
  margin: 0;
  padding: 0;
  min-height: 100vh;
  background: var(--night);
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 18px;
  overflow-x: hidden;
}

a { color: var(--amethyst); text-decoration: none; }
a:hover { color: var(--gold); }

.app-root { min-height: 100vh; }

/* === Backdrop & Scenes === */
.cosmic-backdrop {
  position: fixed;
  inset: 0;
  z-index: -2;
  background: linear-gradient(160deg, var(--night) 0%, var(--night-mid) 55%, var(--night-edge) 100%);
}

.scene-canvas { display: block; }

.scene-backdrop {
  position: fixed;
  inset: 0;
  width: 100vw;
  height: 100vh;
  z-index: -1;
  pointer-events: none;
}

.scene-stage {
  width: 100%;
  height: 100%;
  border-radius: var(--radius);
}

.scene-stage .scene-card { cursor: pointer; }

.card-detail-stage, .shuffle-stage {
  height: 60vh;
  min-height: 360px;
  border-radius: var(--radius);
  overflow: hidden;
  background: rgba(0, 0, 0, 0.25);
}

/* === Layout === */
.main-layout {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-content {
  flex: 1;
  width: 100%;
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.footer {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  padding: 1.5rem;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.9rem 2rem;
  background: rgba(15, 12, 41, 0.6);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--glass-border);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  color: var(--gold);
  letter-spacing: 0.08em;
}

.nav-links { display: flex; gap: 1.25rem; }

.nav-link {
  font-family: var(--font-ui);
  font-size: 0.9rem;
  color: var(--text-secondary);
  transition: color var(--transition);
}

.nav-link:hover, .nav-link.active { color: var(--gold); }

.nav-session { display: flex; align-items: center; gap: 0.75rem; }

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  color: var(--gold);
  font-size: 2.4rem;
  margin: 0 0 0.5rem;
  text-shadow: 0 0 15px var(--gold-glow);
}

.logo {
  font-size: 3.5rem;
  background: linear-gradient(45deg, var(--gold-bright), #e46f4a);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.tagline { color: var(--text-secondary); font-style: italic; margin-top: 0; }

.section-header {
  font-family: var(--font-display);
  color: var(--amethyst);
  font-size: 1.3rem;
  margin: 1.25rem 0 0.5rem;
}

.body-text { color: var(--text-secondary); line-height: 1.6; }
.card-meta { color: var(--text-muted); font-family: var(--font-ui); font-size: 0.85rem; }
.error-message { color: var(--danger); }
.empty-state { color: var(--text-muted); font-style: italic; }
.result-count { color: var(--text-muted); font-size: 0.9rem; }

.question {
  border-left: 3px solid var(--gold);
  margin: 1rem 0;
  padding: 0.25rem 1rem;
  font-style: italic;
}

/* === Glass Cards === */
.glass-card {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: var(--radius);
  backdrop-filter: blur(8px);
  padding: 1.5rem;
  margin: 1rem 0;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-family: var(--font-ui);
  font-size: 0.9rem;
  padding: 0.65rem 1.4rem;
  border-radius: 999px;
  border: 1px solid transparent;
  cursor: pointer;
  transition: transform var(--transition), box-shadow var(--transition), background var(--transition);
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn:not(:disabled):hover { transform: translateY(-2px); }

.btn-primary { background: var(--amethyst-deep); color: white; }
.btn-primary:not(:disabled):hover { box-shadow: 0 0 18px var(--amethyst-glow); }

.btn-mystic {
  background: linear-gradient(45deg, var(--gold-bright), #e46f4a);
  color: #1b1640;
  font-weight: 600;
}
.btn-mystic:not(:disabled):hover { box-shadow: 0 0 22px var(--gold-glow); }

.btn-outline { background: transparent; color: var(--amethyst); border-color: var(--amethyst); }
.btn-ghost { background: transparent; color: var(--text-secondary); }

.btn-spinner {
  width: 0.9rem;
  height: 0.9rem;
  border: 2px solid currentColor;
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.2rem;
  cursor: pointer;
}

.button-row { display: flex; gap: 0.75rem; margin-top: 1rem; flex-wrap: wrap; }

/* === Inputs === */
.form-field { display: flex; flex-direction: column; gap: 0.35rem; margin-bottom: 1rem; }
.input-label { font-family: var(--font-ui); font-size: 0.8rem; color: var(--text-muted); text-transform: uppercase; letter-spacing: 0.06em; }

.input-field {
  background: rgba(0, 0, 0, 0.25);
  border: 1px solid var(--glass-border);
  border-radius: 10px;
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 1rem;
  padding: 0.7rem 0.9rem;
  outline: none;
  transition: border-color var(--transition), box-shadow var(--transition);
}

.input-field:focus { border-color: var(--amethyst); box-shadow: 0 0 0 3px var(--amethyst-glow); }
.input-field.invalid { border-color: var(--danger); }
.input-error { color: var(--danger); font-size: 0.85rem; margin: 0; }
.textarea { resize: vertical; }

.search-input-wrapper { position: relative; flex: 1; }
.search-icon { position: absolute; left: 0.9rem; top: 50%; transform: translateY(-50%); color: var(--gold); }
.search-input { width: 100%; padding-left: 2.4rem; }

/* === Filter Pills === */
.library-controls { display: flex; flex-direction: column; gap: 1rem; margin-bottom: 1.5rem; }
.filter-pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.pill {
  background: var(--glass);
  border: 1px solid var(--glass-border);
  border-radius: 999px;
  color: var(--text-secondary);
  font-family: var(--font-ui);
  font-size: 0.85rem;
  padding: 0.4rem 1rem;
  cursor: pointer;
}

.pill.selected { background: var(--amethyst-deep); color: white; border-color: var(--amethyst); }

/* === Card Tiles === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(140px, 1fr));
  gap: 1.25rem;
}

.card-tile { display: flex; flex-direction: column; align-items: center; gap: 0.4rem; text-align: center; }
.card-tile.clickable { cursor: pointer; }
.card-tile.clickable:hover .card-image { transform: translateY(-6px); box-shadow: 0 10px 30px var(--amethyst-glow); }

.card-image {
  width: 100%;
  aspect-ratio: 5 / 8;
  object-fit: cover;
  border-radius: 10px;
  border: 1px solid var(--glass-border);
  transition: transform var(--transition), box-shadow var(--transition);
}

.card-image.reversed { transform: rotate(180deg); }
.card-name { font-family: var(--font-display); color: var(--gold); font-size: 0.95rem; }
.card-position { font-family: var(--font-ui); font-size: 0.75rem; color: var(--amethyst); text-transform: uppercase; }
.card-orientation { font-size: 0.8rem; color: var(--text-muted); font-style: italic; }

.keywords, .tags { display: flex; flex-wrap: wrap; gap: 0.4rem; margin: 0.75rem 0; }
.keyword, .tag, .badge {
  background: rgba(156, 136, 255, 0.15);
  color: var(--amethyst);
  border-radius: 999px;
  font-family: var(--font-ui);
  font-size: 0.75rem;
  padding: 0.2rem 0.7rem;
}

/* === Pages === */
.home { display: flex; flex-direction: column; align-items: center; gap: 3rem; padding-top: 3rem; }
.home-header { text-align: center; }
.home-doors { display: grid; grid-template-columns: repeat(2, minmax(180px, 1fr)); gap: 1.25rem; }

.home-door {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 1.5rem;
  background: var(--glass);
  border-radius: var(--radius);
  backdrop-filter: blur(8px);
  color: var(--text-primary);
  transition: transform var(--transition), background var(--transition);
}

.home-door:hover { transform: translateY(-5px); background: rgba(255, 255, 255, 0.15); }
.door-icon { font-size: 2.2rem; color: var(--gold-bright); }

.card-detail { display: grid; grid-template-columns: minmax(280px, 2fr) 3fr; gap: 2rem; align-items: start; }
.card-pager { display: flex; justify-content: space-between; margin-top: 1.5rem; }
.card-note { margin-top: 1.5rem; }

.daily-card { text-align: center; }
.daily-hidden { margin-top: 30vh; display: flex; flex-direction: column; align-items: center; gap: 1rem; }
.reveal-hint { font-style: italic; }
.daily-revealed { display: grid; grid-template-columns: 260px 1fr; gap: 2rem; text-align: left; margin-top: 2rem; }

.spread-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.25rem; }
.spread-card { color: var(--text-primary); transition: transform var(--transition); }
.spread-card:hover { transform: translateY(-4px); }
.spread-meta { display: flex; gap: 0.5rem; flex-wrap: wrap; }
.positions li { margin: 0.4rem 0; color: var(--text-secondary); }
.variation h3 { font-family: var(--font-display); font-size: 1rem; margin-bottom: 0.25rem; }

.reading-cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1.5rem; margin: 1.5rem 0; }
.reading-card .body-text { font-size: 0.9rem; }

.profile-header { display: flex; gap: 1.5rem; align-items: center; }
.avatar { width: 88px; height: 88px; border-radius: 50%; object-fit: cover; border: 2px solid var(--gold); }
.avatar-initial { display: flex; align-items: center; justify-content: center; font-family: var(--font-display); font-size: 2.4rem; color: var(--gold); background: var(--glass); }
.reading-list { list-style: none; padding: 0; }
.reading-list li { padding: 0.5rem 0; border-bottom: 1px solid var(--glass-border); }
.journal-entry { padding: 0.75rem 0; border-bottom: 1px solid var(--glass-border); }
.journal-entry h3 { font-family: var(--font-display); color: var(--gold); font-size: 1rem; margin: 0; }

.affirmations { display: flex; flex-direction: column; gap: 1.25rem; }
.affirmation-today, .affirmation-focus { text-align: center; }
.affirmation-focus { border-color: var(--amethyst); display: flex; flex-direction: column; align-items: center; gap: 0.75rem; }
.affirmation-large { font-family: var(--font-display); font-size: 1.3rem; font-style: italic; color: var(--gold); line-height: 1.5; margin: 0; }
.affirmation-list { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 0.75rem; }
.affirmation-item { background: var(--glass); border: 1px solid var(--glass-border); border-radius: 10px; padding: 0.9rem 1.1rem; cursor: pointer; transition: border-color 0.2s ease; }
.affirmation-item:hover, .affirmation-item.selected { border-color: var(--amethyst); }
.affirmation-text { margin: 0 0 0.25rem; font-style: italic; color: var(--text-secondary); }
.affirmation-card { font-size: 0.85rem; color: var(--amethyst); font-weight: 500; }

.auth-page { display: flex; justify-content: center; padding-top: 6vh; }
.auth-card { width: 100%; max-width: 420px; }
.auth-switch { text-align: center; color: var(--text-muted); font-size: 0.9rem; }

.not-found { text-align: center; padding-top: 20vh; }
.about .btn { margin-top: 1rem; }

/* === Loading === */
.loading-container { display: flex; flex-direction: column; align-items: center; gap: 1rem; padding: 3rem 0; }
.loading-message { color: var(--text-secondary); font-style: italic; }

.spinner {
  width: 40px;
  height: 40px;
  border: 3px solid var(--amethyst-glow);
  border-top-color: var(--gold-bright);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

.spinner-sm { width: 20px; height: 20px; border-width: 2px; }
.spinner-page { width: 64px; height: 64px; margin-top: 20vh; }

/* === Toasts === */
.toasts { position: fixed; bottom: 1.5rem; right: 1.5rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 20; }

.toast {
  background: var(--night-mid);
  border: 1px solid var(--glass-border);
  border-left: 4px solid var(--amethyst);
  border-radius: 10px;
  padding: 0.75rem 1rem;
  font-family: var(--font-ui);
  font-size: 0.9rem;
  cursor: pointer;
}

.toast-success { border-left-color: var(--success); }
.toast-error { border-left-color: var(--danger); }

/* === Animations === */
@keyframes spin { to { transform: rotate(360deg); } }

@media (max-width: 760px) {
  .nav-header { flex-wrap: wrap; padding: 0.75rem 1rem; }
  .card-detail, .daily-revealed { grid-template-columns: 1fr; }
  .home-doors { grid-template-columns: 1fr 1fr; }
}
"#;
