// File: crates/chart-core/src/page.rs
// Summary: Host HTML document that the chart SVG is mounted into.

use std::path::Path;

use crate::error::{ChartError, Result};
use crate::svg::Element;
use crate::tooltip::TooltipState;

/// Element id the chart is mounted under by default.
pub const MOUNT_ID: &str = "chart";

const TOOLTIP_CSS: &str = "\
body { font-family: sans-serif; margin: 2rem; }
#chart { max-width: 960px; }
.tooltip { position: absolute; pointer-events: none; padding: 4px 8px; background: #fff; border: 1px solid #dcdcdc; border-radius: 4px; font-size: 12px; transition: opacity 0.1s; }
.tooltip dl { margin: 0; }
.tooltip dt { font-weight: bold; display: inline; }
.tooltip dd { display: inline; margin: 0 0 0 4px; }";

/// Binds the `.data-point` markers and the `.threshold-line` path to the
/// `.tooltip` element, using the same content as [`TooltipContent`].
///
/// [`TooltipContent`]: crate::tooltip::TooltipContent
pub const HOVER_SCRIPT: &str = r#"(() => {
  const tip = document.querySelector('.tooltip');
  const svg = document.querySelector('#chart svg');
  if (!tip || !svg) return;
  const show = (ev, html) => {
    tip.innerHTML = html;
    tip.style.opacity = 1;
    tip.style.left = ev.pageX + 'px';
    tip.style.top = ev.pageY + 'px';
  };
  const hide = () => { tip.style.opacity = 0; };
  const points = Array.from(svg.querySelectorAll('.data-point'));
  for (const c of points) {
    c.addEventListener('mousemove', ev => show(ev,
      `<dl><div><dt>Date:</dt><dd>${c.dataset.year}</dd></div><div><dt>Value</dt><dd>${c.dataset.value}</dd></div></dl>`));
    c.addEventListener('mouseout', hide);
  }
  const line = svg.querySelector('.threshold-line');
  if (!line) return;
  // Every threshold sample carries the same value.
  line.addEventListener('mousemove', ev =>
    show(ev, `<dl><dt>Threshold:</dt><dd>${line.dataset.value}</dd></dl>`));
  line.addEventListener('mouseout', hide);
})();"#;

#[derive(Clone, Debug, PartialEq)]
pub struct HostDocument {
    html: String,
}

impl HostDocument {
    /// Page with a `#chart` mount point, a hidden tooltip element and the
    /// script that drives it.
    pub fn new(title: &str) -> Self {
        let html = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{TOOLTIP_CSS}\n</style>\n</head>\n<body>\n<div id=\"{MOUNT_ID}\"></div>\n{}\n<script>\n{HOVER_SCRIPT}\n</script>\n</body>\n</html>\n",
            TooltipState::hidden().to_html()
        );
        Self { html }
    }

    /// Wrap an existing page.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str { &self.html }

    /// Byte offset just past the opening tag of the element with `id`.
    ///
    /// Walks tag by tag, so text content never matches.
    fn mount_offset(&self, id: &str) -> Option<usize> {
        let html = self.html.as_str();
        let mut pos = 0;
        while let Some(rel) = html[pos..].find('<') {
            let start = pos + rel;
            let end = start + html[start..].find('>')?;
            if tag_has_id(&html[start + 1..end], id) {
                return Some(end + 1);
            }
            pos = end + 1;
        }
        None
    }

    /// Insert `svg` as the first child of the element with `id`.
    pub fn mount(&mut self, id: &str, svg: &Element) -> Result<()> {
        let offset = self
            .mount_offset(id)
            .ok_or_else(|| ChartError::MissingMountPoint(id.to_string()))?;
        self.html.insert_str(offset, &svg.to_string());
        Ok(())
    }

    /// Write the page to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &self.html)?;
        tracing::info!(path = %path.display(), "wrote host document");
        Ok(())
    }
}

/// True when the opening tag body `tag` (between `<` and `>`) carries `id`.
/// The attribute must start a word, so `data-id` does not count.
fn tag_has_id(tag: &str, id: &str) -> bool {
    if tag.starts_with(['/', '!', '?']) {
        return false;
    }
    [format!("id=\"{id}\""), format!("id='{id}'")].iter().any(|needle| {
        tag.match_indices(needle.as_str())
            .any(|(at, _)| tag[..at].ends_with(|c: char| c.is_ascii_whitespace()))
    })
}
