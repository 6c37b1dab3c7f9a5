//! Global CSS styles for the invitation card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f3f4f6;
  --card-bg: #ffffff;
  --card-border: #d1d5db;
  --overlay-dark: rgba(0, 0, 0, 0.75);

  /* TEXT */
  --text-strong: #1f2937;
  --text-body: #374151;
  --text-muted: #4b5563;

  /* ACTIONS */
  --blue: #3b82f6;
  --blue-hover: #2563eb;
  --green: #22c55e;
  --green-hover: #16a34a;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-body);
}

/* === Page === */
.card-page {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 1rem;
}

/* === Card === */
.invitation-card {
  display: flex;
  flex-direction: row;
  max-width: 42rem;
  margin: 0 auto;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}

.invitation-image {
  width: 50%;
  object-fit: cover;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.invitation-image:hover {
  opacity: 0.8;
}

.invitation-image.pulse {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

.invitation-body {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: 1.5rem;
}

.invitation-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--text-strong);
}

.invitation-description {
  margin-top: 0.5rem;
  color: var(--text-muted);
}

.invitation-details {
  margin-top: 1rem;
}

.invitation-details p + p {
  margin-top: 0.5rem;
}

@media (max-width: 640px) {
  .invitation-card { flex-direction: column; }
  .invitation-image { width: 100%; }
}

/* === Buttons === */
.btn-primary,
.btn-confirmed,
.btn-add {
  color: #ffffff;
  font-weight: 600;
  border: none;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary,
.btn-confirmed {
  margin-top: 1rem;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
}

.btn-primary {
  background: var(--blue);
}

.btn-primary:hover:not(:disabled) {
  background: var(--blue-hover);
}

.btn-confirmed {
  background: var(--green);
  cursor: default;
}

.btn-add {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--green);
}

.btn-add:hover {
  background: var(--green-hover);
}

.btn-primary:disabled {
  opacity: 0.7;
  cursor: wait;
}

.submit-btn {
  width: 100%;
}

/* === Inputs === */
.input-field {
  width: 100%;
  padding: 0.5rem;
  border: 1px solid var(--card-border);
  border-radius: 0.25rem;
  font: inherit;
}

.guest-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.phone-row {
  margin-top: 0.5rem;
}

/* === Overlays === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay-dark);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  z-index: 1000;
}

.image-viewer-image {
  max-width: 100%;
  max-height: 100%;
  border-radius: 0.5rem;
  cursor: pointer;
}

.rsvp-modal {
  width: 100%;
  max-width: 28rem;
  padding: 1.5rem;
  background: var(--card-bg);
  border-radius: 0.5rem;
}

.modal-title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-strong);
  margin-bottom: 1rem;
}

.thank-you-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--card-bg);
  font-size: 1.25rem;
  font-weight: 600;
  z-index: 1100;
  animation: fade-in var(--transition-normal) ease-out;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
