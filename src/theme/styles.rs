//! Global CSS styles for the profile card viewer.
//!
//! Light blue/indigo palette matching the original mock-ups.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-top: #eff6ff;
  --bg-bottom: #e0e7ff;
  --card-bg: #ffffff;

  /* Accents */
  --indigo: #4f46e5;
  --blue: #3b82f6;
  --blue-hover: #2563eb;
  --red: #ef4444;
  --red-hover: #dc2626;
  --green: #22c55e;

  /* Text */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-reveal: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, var(--bg-top), var(--bg-bottom));
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Page Layout === */
.page {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.page-header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.page-footer {
  text-align: center;
  margin-top: 2rem;
  color: var(--text-muted);
  font-size: 0.875rem;
}

/* === Timer Panel === */
.timer-panel {
  display: inline-block;
  background: var(--card-bg);
  border-radius: 0.5rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  padding: 1rem;
}

.timer-panel__label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.timer-panel__value {
  font-family: var(--font-mono);
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--indigo);
}

/* === Toggle Button === */
.toggle-row {
  text-align: center;
  margin-bottom: 2rem;
}

.btn-toggle {
  padding: 0.75rem 2rem;
  border: none;
  border-radius: 0.5rem;
  font-size: 1rem;
  font-weight: 600;
  color: #ffffff;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-toggle:hover {
  transform: scale(1.05);
}

.btn-toggle--show {
  background: var(--blue);
  box-shadow: 0 10px 15px rgba(59, 130, 246, 0.3);
}

.btn-toggle--show:hover {
  background: var(--blue-hover);
}

.btn-toggle--hide {
  background: var(--red);
  box-shadow: 0 10px 15px rgba(239, 68, 68, 0.3);
}

.btn-toggle--hide:hover {
  background: var(--red-hover);
}

/* === Profile Reveal === */
.profile-reveal {
  transition: all var(--transition-reveal);
}

.profile-reveal--shown {
  opacity: 1;
  transform: translateY(0) scale(1);
}

.profile-reveal--hidden {
  opacity: 0;
  transform: translateY(1rem) scale(0.95);
  pointer-events: none;
}

/* === Profile Card === */
.profile-card {
  background: var(--card-bg);
  border-radius: 0.75rem;
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
  padding: 2rem;
}

.profile-card__layout {
  display: flex;
  align-items: flex-start;
  gap: 1.5rem;
}

.profile-card__avatar {
  width: 10rem;
  height: 10rem;
  border-radius: 50%;
  object-fit: cover;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  border: 4px solid #ffffff;
  flex-shrink: 0;
}

.profile-card__name {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.profile-card__profession {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--indigo);
  margin-bottom: 1rem;
}

.profile-card__bio {
  color: var(--text-secondary);
}

.profile-card__footer {
  display: flex;
  gap: 1rem;
  margin-top: 1.5rem;
  padding-top: 1.5rem;
  border-top: 1px solid #e5e7eb;
  font-size: 0.875rem;
  color: var(--text-muted);
}

.profile-card__stat {
  display: flex;
  align-items: center;
  flex: 1;
}

.stat-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  margin-right: 0.5rem;
}

.stat-dot--available {
  background: var(--green);
}

.stat-dot--views {
  background: var(--blue);
}
"#;
