//! Global CSS styles for the Ocean Simulation Viewer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DEPTHS (Backgrounds) */
  --abyss: #06121c;
  --abyss-lighter: #0b1d2b;
  --abyss-border: #173247;

  /* SURFACE (Accents) */
  --surf: #2fb3d6;
  --surf-glow: rgba(47, 179, 214, 0.3);
  --kelp: #4caf7d;

  /* TEXT */
  --text-primary: #eef6fa;
  --text-secondary: rgba(238, 246, 250, 0.7);
  --text-muted: rgba(238, 246, 250, 0.5);

  /* SEMANTIC */
  --danger: #ff5a6e;
  --warning: #ffb347;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 2rem;

  --transition-fast: 150ms ease;
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
}

body {
  font-family: var(--font-sans);
  background: var(--abyss);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.app-shell {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.app-header {
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--surf);
  letter-spacing: 0.04em;
}

.endpoint-label {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Upload Form === */
.upload-form {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.upload-form__controls {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  background: var(--abyss-lighter);
  border: 1px solid var(--abyss-border);
  border-radius: 6px;
}

.file-input {
  flex: 1;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.file-label {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Buttons === */
.btn-primary,
.btn-ghost {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  padding: 0.5rem 1.25rem;
  border-radius: 4px;
  cursor: pointer;
  transition: box-shadow var(--transition-fast), background var(--transition-fast);
}

.btn-primary {
  background: var(--surf);
  border: 1px solid var(--surf);
  color: var(--abyss);
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 14px var(--surf-glow);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--abyss-border);
  color: var(--text-secondary);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Status Indicator === */
.simulation-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--abyss-border);
}

.status-dot.busy {
  background: var(--surf);
  box-shadow: 0 0 10px var(--surf-glow);
  animation: pulse 1.2s ease-in-out infinite;
}

.status-dot.ok {
  background: var(--kelp);
}

.status-dot.failed {
  background: var(--danger);
}

.status-detail {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: var(--text-muted);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === Error Banner === */
.error-banner {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  border: 1px solid var(--danger);
  border-radius: 4px;
  background: rgba(255, 90, 110, 0.08);
  color: var(--danger);
  font-size: var(--text-sm);
}

.error-banner__message {
  flex: 1;
}

.error-banner__dismiss {
  background: none;
  border: none;
  color: inherit;
  font-size: 1.25rem;
  cursor: pointer;
}

/* === Result === */
.result-image {
  width: 80%;
  margin-top: 1rem;
  border: 1px solid var(--abyss-border);
  border-radius: 4px;
}

.result-image__missing {
  margin-top: 1rem;
  color: var(--warning);
  font-size: var(--text-sm);
}
"#;
