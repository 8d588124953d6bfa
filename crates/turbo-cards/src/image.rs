//! Image-load state of a single card.

use serde::Serialize;

/// Whether a card's image has finished loading.
///
/// Starts in `Loading` and moves to `Loaded` on the first completion
/// signal. It never goes back, even if the card is later pointed at a
/// different image; the card must be recreated for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
}

impl ImageLoadState {
    /// Handle a load-completion signal (success or failure alike).
    ///
    /// Returns `true` if this call moved the state forward, `false` if the
    /// image was already loaded.
    pub fn mark_loaded(&mut self) -> bool {
        match self {
            ImageLoadState::Loading => {
                *self = ImageLoadState::Loaded;
                true
            }
            ImageLoadState::Loaded => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        *self == ImageLoadState::Loading
    }

    /// The placeholder overlay is shown only while loading.
    pub fn shows_placeholder(&self) -> bool {
        self.is_loading()
    }

    /// Opacity class for the image element.
    pub fn opacity_class(&self) -> &'static str {
        match self {
            ImageLoadState::Loading => "opacity-0",
            ImageLoadState::Loaded => "opacity-100",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageLoadState::Loading => "loading",
            ImageLoadState::Loaded => "loaded",
        }
    }
}
