use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::{ElementBounds, Viewport};

/// Empty space kept below the lowest element, in page pixels.
pub const PAGE_BOTTOM_MARGIN: f32 = 100.0;

/// RGBA8 pixel data ready for upload.
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self { width, height, rgba }
    }
}

/// How an element's image is produced. The page description stays
/// serializable by keeping textures procedural rather than file-backed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureSpec {
    /// Two-tone checkerboard.
    Checker { a: [u8; 3], b: [u8; 3] },
    /// Vertical gradient.
    Gradient { from: [u8; 3], to: [u8; 3] },
    /// Animated-water-style blue noise bands.
    Ocean,
}

impl TextureSpec {
    /// Rasterize at the given resolution.
    pub fn bake(&self, width: u32, height: u32) -> TextureData {
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = match self {
                    TextureSpec::Checker { a, b } => {
                        if ((x / 16) + (y / 16)) % 2 == 0 {
                            *a
                        } else {
                            *b
                        }
                    }
                    TextureSpec::Gradient { from, to } => {
                        let t = y as f32 / (height.max(2) - 1) as f32;
                        [
                            lerp_u8(from[0], to[0], t),
                            lerp_u8(from[1], to[1], t),
                            lerp_u8(from[2], to[2], t),
                        ]
                    }
                    TextureSpec::Ocean => {
                        let fx = x as f32 / width as f32;
                        let fy = y as f32 / height as f32;
                        let wave = ((fx * 24.0).sin() * 0.5 + (fy * 18.0 + fx * 6.0).sin() * 0.5)
                            * 0.5
                            + 0.5;
                        [
                            (20.0 + wave * 40.0) as u8,
                            (80.0 + wave * 90.0) as u8,
                            (140.0 + wave * 100.0) as u8,
                        ]
                    }
                };
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
        }

        TextureData::new(width, height, rgba)
    }
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// One image element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    pub bounds: ElementBounds,
    pub texture: TextureSpec,
}

/// Stand-in for the DOM: a viewport plus the measured bounding boxes of the
/// page's image elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub elements: Vec<PageElement>,
}

impl PageLayout {
    /// Load a page description from a JSON file. Fails fast with context
    /// instead of hanging on a missing page.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page layout {}", path.display()))?;
        let layout: PageLayout = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse page layout {}", path.display()))?;
        Ok(layout)
    }

    /// Full page height: bottom edge of the lowest element plus a margin.
    pub fn page_height(&self) -> f32 {
        self.elements
            .iter()
            .map(|e| e.bounds.top + e.bounds.height)
            .fold(self.viewport.height, f32::max)
            + PAGE_BOTTOM_MARGIN
    }

    /// Scrollable extent for this layout.
    pub fn scroll_extent(&self) -> f32 {
        (self.page_height() - self.viewport.height).max(0.0)
    }
}

/// Built-in demo page: a column of images alternating left and right,
/// tall enough to need scrolling.
pub fn demo_page(viewport: Viewport) -> PageLayout {
    let palettes: [TextureSpec; 4] = [
        TextureSpec::Gradient { from: [235, 110, 75], to: [120, 40, 90] },
        TextureSpec::Checker { a: [240, 240, 235], b: [30, 30, 40] },
        TextureSpec::Gradient { from: [80, 180, 170], to: [20, 60, 110] },
        TextureSpec::Ocean,
    ];

    let width = viewport.width * 0.4;
    let height = width * 0.75;
    let gap = height * 0.6;

    let elements = (0..8)
        .map(|i| {
            let left = if i % 2 == 0 {
                viewport.width * 0.08
            } else {
                viewport.width * 0.52
            };
            PageElement {
                bounds: ElementBounds::new(60.0 + i as f32 * (height + gap), left, width, height),
                texture: palettes[i % palettes.len()],
            }
        })
        .collect();

    PageLayout { viewport, elements }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baked_texture_has_rgba_size() {
        let tex = TextureSpec::Ocean.bake(64, 32);
        assert_eq!(tex.width, 64);
        assert_eq!(tex.height, 32);
        assert_eq!(tex.rgba.len(), 64 * 32 * 4);
        assert!(tex.rgba.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn gradient_interpolates_vertically() {
        let tex = TextureSpec::Gradient { from: [0, 0, 0], to: [200, 100, 50] }.bake(4, 64);
        let top = &tex.rgba[0..3];
        let bottom = &tex.rgba[tex.rgba.len() - 4..tex.rgba.len() - 1];
        assert_eq!(top, &[0, 0, 0]);
        assert_eq!(bottom, &[200, 100, 50]);
    }

    #[test]
    fn demo_page_scrolls() {
        let page = demo_page(Viewport::new(800.0, 600.0));
        assert_eq!(page.elements.len(), 8);
        assert!(page.scroll_extent() > 0.0);
        assert!(page.page_height() > page.viewport.height);
    }

    #[test]
    fn layout_round_trips_through_json() {
        let page = demo_page(Viewport::new(800.0, 600.0));
        let json = serde_json::to_string(&page).unwrap();
        let back: PageLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn missing_layout_file_fails_with_context() {
        let err = PageLayout::load(Path::new("/nonexistent/page.json")).unwrap_err();
        assert!(err.to_string().contains("page.json"));
    }
}
