//! Global CSS styles for the Cosplayer Portal.
//!
//! Light palette on `:root`, dark overrides under `.portal.dark`. Door,
//! particle and toast classes match the names the components render.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #f8fafc;
  --bg-elevated: #ffffff;
  --border: #e2e8f0;
  --text-primary: #0f172a;
  --text-secondary: #475569;
  --accent: #3b82f6;
  --danger: #dc2626;
  --success: #16a34a;

  --font-display: 'Cinzel', Georgia, serif;
  --font-body: 'Inter', system-ui, sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-door: 1.5s cubic-bezier(0.4, 0, 0.2, 1);
}

.portal.dark {
  --bg: #0b1020;
  --bg-elevated: #151b2e;
  --border: #26304a;
  --text-primary: #f1f5f9;
  --text-secondary: #94a3b8;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-body);
  -webkit-font-smoothing: antialiased;
}

.portal {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  transition: background var(--transition-normal), color var(--transition-normal);
  position: relative;
  overflow-x: hidden;
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: 3rem;
  letter-spacing: 0.05em;
}

.tagline {
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

/* === Home === */
.home {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 3rem;
  padding: 4rem 2rem;
}

.home-header,
.home-instructions {
  opacity: 0;
  transform: translateY(-20px);
  transition: opacity 800ms ease, transform 800ms ease;
  text-align: center;
  z-index: 1;
}

.home-instructions {
  transform: translateY(20px);
  color: var(--text-secondary);
}

.home-header.is-visible,
.home-instructions.is-visible {
  opacity: 1;
  transform: translateY(0);
}

.door-row {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 3rem;
  z-index: 1;
}

/* === Doors === */
.door {
  position: relative;
  width: 220px;
  cursor: pointer;
  perspective: 1200px;
  transition: opacity 800ms ease, transform 800ms ease;
}

.door-hidden {
  opacity: 0;
  transform: translateY(30px);
}

.door-visible,
.door-opening {
  opacity: 1;
  transform: translateY(0);
}

.door-panel {
  position: relative;
  height: 340px;
  border: 3px solid var(--accent);
  border-radius: 110px 110px 8px 8px;
  overflow: hidden;
  background: var(--bg-elevated);
  transform-origin: left center;
  transition: transform var(--transition-door), box-shadow var(--transition-normal);
}

.door-opening .door-panel {
  transform: rotateY(-105deg);
}

.door-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.door-handle {
  position: absolute;
  right: 18px;
  top: 50%;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--accent);
}

.door-glow-layer {
  position: absolute;
  inset: -20px;
  border-radius: 130px 130px 20px 20px;
  background: radial-gradient(circle, var(--accent) 0%, transparent 70%);
  opacity: 0;
  transition: opacity var(--transition-normal);
  pointer-events: none;
}

.door-glow .door-glow-layer {
  opacity: 0.45;
}

.door-glow .door-panel {
  box-shadow: 0 0 30px var(--accent);
}

.door-label {
  margin-top: 1rem;
  text-align: center;
  font-family: var(--font-display);
  font-size: 1.25rem;
}

.door-frame {
  position: absolute;
  width: 60px;
  height: 60px;
  z-index: 2;
}

.door-frame-0 { top: -10px; left: -10px; }
.door-frame-1 { bottom: 40px; right: -10px; }

.door-hover-particles {
  inset: 0;
  z-index: 2;
}

/* === Particles === */
.particle-layer {
  position: absolute;
  overflow: hidden;
  pointer-events: none;
}

.page-particles {
  position: fixed;
  inset: 0;
  z-index: 0;
}

.hero-particles {
  inset: 0;
  z-index: 1;
}

.particle {
  position: absolute;
  border-radius: 50%;
  animation-name: particle-float;
  animation-timing-function: ease-in-out;
  animation-fill-mode: both;
}

@keyframes particle-float {
  0%   { transform: translate(0, 0) scale(0.6); opacity: 0; }
  20%  { opacity: 1; }
  80%  { opacity: 1; }
  100% { transform: translate(20px, -80px) scale(1); opacity: 0; }
}

/* === Showcase === */
.showcase {
  position: relative;
  min-height: 100vh;
  padding: 2rem;
}

.showcase-nav {
  position: relative;
  z-index: 2;
}

.showcase-hero {
  position: relative;
  z-index: 1;
  display: grid;
  grid-template-columns: minmax(280px, 1fr) 1.2fr;
  gap: 3rem;
  align-items: center;
  margin-top: 2rem;
}

.hero-frame {
  position: relative;
  border: 2px solid var(--accent);
  border-radius: 12px;
  overflow: hidden;
  box-shadow: 0 0 40px color-mix(in srgb, var(--accent) 40%, transparent);
}

.hero-image {
  display: block;
  width: 100%;
}

.showcase-title {
  font-family: var(--font-display);
  font-size: 2.5rem;
  color: var(--accent);
}

.showcase-description {
  margin-top: 1rem;
  color: var(--text-secondary);
  line-height: 1.7;
}

.showcase-highlights {
  margin: 1.5rem 0 0 1.25rem;
  line-height: 1.9;
}

.showcase-actions {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

/* === Buttons === */
.btn-action,
.btn-back,
.btn-ghost {
  font: inherit;
  padding: 0.7rem 1.4rem;
  border-radius: 8px;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-action {
  background: var(--accent);
  color: #ffffff;
  border: none;
}

.btn-action:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px color-mix(in srgb, var(--accent) 50%, transparent);
}

.btn-back,
.btn-ghost {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
  text-decoration: none;
  display: inline-block;
}

.btn-back:hover,
.btn-ghost:hover {
  border-color: var(--accent);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: transparent;
  border: none;
  color: inherit;
  cursor: pointer;
}

.btn-round {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
}

.theme-toggle {
  position: fixed;
  top: 1.25rem;
  right: 1.25rem;
  z-index: 50;
}

/* === Toasts === */
.toast-viewport {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  z-index: 100;
}

.toast-stack {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 1rem;
  min-width: 280px;
  max-width: 380px;
  padding: 1rem 1.25rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
  animation: toast-in 300ms ease both;
}

.toast-leaving {
  animation: toast-out 300ms ease both;
}

.toast-success { border-color: var(--success); }
.toast-destructive { border-color: var(--danger); }

.toast-title { font-weight: 600; }
.toast-description { color: var(--text-secondary); font-size: 0.9rem; margin-top: 0.25rem; }

.close-btn {
  margin-left: auto;
  font-size: 1.25rem;
  color: var(--text-secondary);
}

@keyframes toast-in {
  from { opacity: 0; transform: translateX(40px); }
  to   { opacity: 1; transform: translateX(0); }
}

@keyframes toast-out {
  from { opacity: 1; transform: translateX(0); }
  to   { opacity: 0; transform: translateX(40px); }
}

/* === Not Found === */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}
"#;
