//! Global CSS styles for Cognitive Frameworks.
//!
//! Dark slate background with per-card accents. Each card sets `--accent`
//! inline; everything inside derives its tints from it with `color-mix`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-void: hsl(220 15% 3%);
  --slate-deep: hsl(220 15% 6%);
  --slate-card: hsl(220 15% 10%);
  --slate-border: hsl(220 10% 18%);
  --slate-rule: hsl(220 10% 15%);

  /* TEXT */
  --text-primary: hsl(0 0% 95%);
  --text-body: hsl(220 10% 75%);
  --text-secondary: hsl(220 10% 60%);
  --text-muted: hsl(220 10% 50%);
  --text-faint: hsl(220 10% 40%);

  /* Default accent (overridden per card) */
  --accent: hsl(190 80% 50%);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--slate-void);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

button:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

/* === Page === */
.overview {
  position: relative;
  min-height: 100vh;
  padding: 3rem 1rem;
}

.overview-backdrop {
  position: fixed;
  inset: 0;
  pointer-events: none;
  background: radial-gradient(ellipse at top, hsl(220 30% 8%) 0%, var(--slate-void) 100%);
}

.overview-inner {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
}

.load-error {
  text-align: center;
  color: var(--text-secondary);
}

/* === Header === */
.page-header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  margin-bottom: 1.5rem;
  border-radius: 9999px;
  background: hsl(215 28% 17% / 0.8);
  border: 1px solid hsl(215 20% 27%);
  font-size: 0.875rem;
  color: hsl(213 27% 84%);
}

.page-badge__icon {
  color: hsl(188 86% 53%);
}

.page-title {
  font-size: 2.75rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  margin-bottom: 1rem;
  background: linear-gradient(135deg, hsl(0 0% 100%) 0%, hsl(220 10% 70%) 100%);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.page-subtitle {
  max-width: 42rem;
  margin: 0 auto;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

/* === Controls === */
.expansion-controls {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.expansion-status {
  text-align: center;
  font-size: 0.75rem;
  color: var(--text-faint);
  margin-bottom: 2rem;
}

.btn-control,
.btn-accent,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font-size: 0.875rem;
  font-weight: 500;
  transition: transform var(--transition-fast), background var(--transition-fast);
}

.btn-control {
  background: hsl(220 10% 15%);
  color: hsl(0 0% 90%);
  border: 1px solid hsl(220 10% 25%);
}

.btn-accent {
  background: color-mix(in srgb, var(--accent) 20%, transparent);
  color: var(--accent);
  border: 1px solid color-mix(in srgb, var(--accent) 30%, transparent);
}

.btn-ghost {
  color: var(--text-muted);
}

.btn-control:hover,
.btn-accent:hover {
  transform: scale(1.05);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

button:disabled {
  opacity: 0.5;
  cursor: default;
  transform: none;
}

/* === Cards === */
.card-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.framework-card {
  position: relative;
  overflow: hidden;
  border-radius: 0.75rem;
  background: linear-gradient(145deg, var(--slate-card) 0%, var(--slate-deep) 100%);
  border: 1px solid var(--slate-border);
  box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.framework-card--open {
  border-color: var(--accent);
  box-shadow:
    0 0 30px color-mix(in srgb, var(--accent) 19%, transparent),
    0 4px 20px rgba(0, 0, 0, 0.5);
}

.framework-card__accent {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 4px;
  background: transparent;
  transition: background var(--transition-normal);
}

.framework-card--open .framework-card__accent {
  background: var(--accent);
}

.card-header {
  width: 100%;
  padding: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  text-align: left;
}

.card-header:hover {
  background: hsl(215 28% 17% / 0.3);
}

.card-header__lead {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.card-header__icon {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 0.5rem;
  font-size: 1.5rem;
  color: var(--accent);
  background: color-mix(in srgb, var(--accent) 8%, transparent);
}

.card-header__title {
  font-size: 1.25rem;
  font-weight: 600;
  letter-spacing: -0.01em;
  color: var(--text-primary);
  transition: color var(--transition-normal);
}

.framework-card--open .card-header__title {
  color: var(--accent);
}

.card-header__toggle {
  padding: 0.5rem;
  border-radius: 0.5rem;
  transition: background var(--transition-normal);
}

.framework-card--open .card-header__toggle {
  background: color-mix(in srgb, var(--accent) 12%, transparent);
}

.chevron {
  display: inline-block;
  font-size: 1.25rem;
  line-height: 1;
  color: var(--text-muted);
  transition: transform var(--transition-normal), color var(--transition-normal);
}

.chevron--open {
  color: var(--accent);
}

/* === Card body === */
.framework-card__body {
  margin: 0 1.5rem 1.5rem;
  padding-top: 0.5rem;
  border-top: 1px solid var(--slate-rule);
  animation: body-open var(--transition-normal);
}

@keyframes body-open {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: translateY(0); }
}

.framework-card__summary {
  margin-top: 1rem;
  font-size: 1rem;
  line-height: 1.7;
  color: var(--text-body);
}

/* === Step flow === */
.step-flow {
  list-style: none;
  margin-top: 1.25rem;
}

.step-flow--inline {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.step-flow--stacked {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.step {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.step-flow--stacked .step {
  flex-direction: column;
  gap: 0.75rem;
  width: 100%;
}

.step-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.375rem 0.75rem;
  border-radius: 0.375rem;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--accent);
  background: color-mix(in srgb, var(--accent) 8%, transparent);
  border: 1px solid color-mix(in srgb, var(--accent) 19%, transparent);
}

.step-chip--pill {
  max-width: 100%;
  padding: 0.75rem 1.25rem;
  border-radius: 9999px;
  font-weight: 400;
  color: hsl(214 32% 91%);
}

.step-chip__ordinal {
  font-family: var(--font-mono);
  font-weight: 600;
  color: var(--accent);
}

.step-chip__icon {
  font-size: 1rem;
}

.flow-connector {
  color: var(--accent);
}

.step-flow--stacked .flow-connector {
  font-size: 1.125rem;
  color: hsl(215 16% 35%);
}

/* === Footer === */
.page-footer {
  margin-top: 4rem;
  text-align: center;
}

.page-footer__lead {
  font-size: 0.875rem;
  color: var(--text-faint);
}

.page-footer__hint {
  margin-top: 0.5rem;
  font-size: 0.75rem;
  color: hsl(215 16% 35%);
}

/* === Responsive === */
@media (min-width: 640px) {
  .overview {
    padding: 3rem 1.5rem;
  }

  .page-title {
    font-size: 3rem;
  }
}

@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after {
    transition: none !important;
    animation: none !important;
  }
}
"#;
