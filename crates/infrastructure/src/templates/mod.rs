//! Template engine for the dashboard pages
//!
//! Uses Tera with templates embedded at compile time. The dashboard page
//! is fully server-rendered: the handler precomputes the chart geometry
//! and the template only places it into static SVG markup, so the page
//! ships without any client-side scripting.

use std::sync::Arc;
use tera::{Context, Tera};
use thiserror::Error;

use serde::Serialize;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const DASHBOARD_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Skycast · {{ view.city }}</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; background: #f3f6fb; color: #1c2733; }
  main { max-width: 960px; margin: 0 auto; padding: 24px; }
  h1 { font-size: 1.6rem; margin-bottom: 4px; }
  .updated { color: #5d6b7a; font-size: 0.85rem; margin-bottom: 20px; }
  .current { background: #ffffff; border-radius: 12px; padding: 20px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 24px; }
  .current .temp { font-size: 2.4rem; font-weight: 600; }
  .current .desc { color: #3b4a59; }
  .current .meta { color: #5d6b7a; font-size: 0.9rem; margin-top: 8px; }
  .cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin-bottom: 24px; }
  .card { background: #ffffff; border-radius: 12px; padding: 14px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
  .card .label { font-weight: 600; }
  .card .digest { color: #3b4a59; font-size: 0.85rem; margin-top: 6px; }
  .card .span { color: #5d6b7a; font-size: 0.85rem; margin-top: 2px; }
  .chart { background: #ffffff; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 24px; }
  table { width: 100%; border-collapse: collapse; background: #ffffff; border-radius: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
  th, td { text-align: left; padding: 8px 12px; font-size: 0.9rem; }
  th { color: #5d6b7a; border-bottom: 1px solid #e3e9f0; }
  tr:nth-child(even) td { background: #f8fafc; }
</style>
</head>
<body>
<main>
  <h1>{{ view.current.location_name }}</h1>
  <p class="updated">Updated {{ view.generated_at }}</p>

  <section class="current">
    <div class="temp">{{ view.current.temperature | round(precision=1) }}°C</div>
    <div class="desc">{{ view.current.description }}</div>
    <div class="meta">
      Feels like {{ view.current.feels_like | round(precision=1) }}°C ·
      Humidity {{ view.current.humidity }}% ·
      Wind {{ view.current.wind_speed | round(precision=1) }} m/s
    </div>
  </section>

  <section class="cards">
  {% for day in view.days %}
    <div class="card">
      <div class="label">{{ day.label }}</div>
      <div class="digest">{{ day.digest }}</div>
      <div class="span">{{ day.temp_span }}</div>
      <div class="span">Humidity {{ day.mean_humidity }}%</div>
    </div>
  {% endfor %}
  </section>

  {% if view.days %}
  <section class="chart">
    <svg viewBox="0 0 {{ chart.width }} {{ chart.height }}" width="100%" role="img" aria-label="Temperature and rain chart">
      <polygon points="{{ chart.band_points }}" fill="#cfe3f8" opacity="0.7"/>
      {% for bar in chart.rain_bars %}
      <rect x="{{ bar.x }}" y="{{ bar.y }}" width="{{ bar.w }}" height="{{ bar.h }}" fill="#4a90d9" opacity="0.5"/>
      {% endfor %}
      <polyline points="{{ chart.mean_points }}" fill="none" stroke="#d9534f" stroke-width="2"/>
      {% for label in chart.x_labels %}
      <text x="{{ label.x }}" y="{{ chart.height - 4 }}" font-size="10" text-anchor="middle" fill="#5d6b7a">{{ label.text }}</text>
      {% endfor %}
      {% for label in chart.y_labels %}
      <text x="4" y="{{ label.y }}" font-size="10" fill="#5d6b7a">{{ label.text }}</text>
      {% endfor %}
    </svg>
  </section>
  {% endif %}

  <table>
    <thead>
      <tr><th>Time</th><th>Temp</th><th>Conditions</th><th>Rain</th><th>Humidity</th><th>Wind</th></tr>
    </thead>
    <tbody>
    {% for row in view.detail %}
      <tr>
        <td>{{ row.time }}</td>
        <td>{{ row.temperature | round(precision=1) }}°C</td>
        <td>{{ row.description }}</td>
        <td>{{ row.rain_3h | round(precision=1) }} mm</td>
        <td>{{ row.humidity }}%</td>
        <td>{{ row.wind_speed | round(precision=1) }} m/s</td>
      </tr>
    {% endfor %}
    </tbody>
  </table>
</main>
</body>
</html>
"##;

    pub const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Skycast · Error</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 0; background: #f3f6fb; color: #1c2733; }
  main { max-width: 640px; margin: 80px auto; padding: 24px; }
  .notice { background: #fdecea; border: 1px solid #f5c6cb; border-radius: 12px; padding: 20px; }
  h1 { font-size: 1.3rem; margin-top: 0; }
</style>
</head>
<body>
<main>
  <div class="notice">
    <h1>Weather data unavailable</h1>
    <p>{{ message }}</p>
  </div>
</main>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm"]);

        tera.add_raw_template("dashboard.html", embedded::DASHBOARD_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("error.html", embedded::ERROR_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the dashboard page
    pub fn render_dashboard(&self, context: &TemplateContext) -> Result<String, TemplateError> {
        self.render("dashboard.html", context)
    }

    /// Render the blocking error notice shown when the feed is down
    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("message", &message);
        self.render("error.html", &ctx)
    }
}
