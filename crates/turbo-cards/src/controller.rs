//! One rendered product card.

use std::fmt;
use std::sync::Arc;

use turbo_commerce::catalog::{Product, ProductView};
use turbo_commerce::{Currency, ProductId};
use turbo_observability::StructuredLogger;
use turbo_theme::{ThemeContext, ThemePreference};

use crate::a11y::CardLabels;
use crate::classes::{CardClasses, ClassList};
use crate::image::ImageLoadState;

/// Callback invoked with the product id when the card's action fires.
pub type ActionCallback = Arc<dyn Fn(&ProductId) + Send + Sync>;

/// Caller-supplied options for a card.
#[derive(Clone, Default)]
pub struct CardProps {
    on_action: Option<ActionCallback>,
    class_name: Option<String>,
    currency: Currency,
}

impl CardProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary action callback.
    pub fn on_action<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ProductId) + Send + Sync + 'static,
    {
        self.on_action = Some(Arc::new(callback));
        self
    }

    /// Set an already shared callback (e.g. one callback for a whole grid).
    pub fn on_action_shared(mut self, callback: ActionCallback) -> Self {
        self.on_action = Some(callback);
        self
    }

    /// Extra classes for the card container.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl fmt::Debug for CardProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardProps")
            .field("on_action", &self.on_action.is_some())
            .field("class_name", &self.class_name)
            .field("currency", &self.currency)
            .finish()
    }
}

/// A product card: the product, the shared theme, and the card's own
/// image-load state.
///
/// The view-model and classes are derived again on every call, so a card
/// always reflects the current theme without being notified of toggles.
pub struct CardController {
    product: Product,
    theme: ThemeContext,
    image: ImageLoadState,
    props: CardProps,
    extra_classes: ClassList,
    logger: StructuredLogger,
}

impl CardController {
    pub fn new(product: Product, theme: ThemeContext, props: CardProps) -> Self {
        let extra_classes = props
            .class_name
            .as_deref()
            .map(ClassList::parse)
            .unwrap_or_default();
        Self {
            product,
            theme,
            image: ImageLoadState::default(),
            props,
            extra_classes,
            logger: StructuredLogger::null(),
        }
    }

    pub fn with_logger(mut self, logger: &StructuredLogger) -> Self {
        self.logger = logger.for_component("product-card");
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn currency(&self) -> Currency {
        self.props.currency
    }

    /// Display fields for this render.
    pub fn view(&self) -> ProductView {
        ProductView::derive(&self.product, self.props.currency)
    }

    /// Theme read at render time.
    ///
    /// # Panics
    ///
    /// Panics if the card was built with an empty [`ThemeContext`].
    #[track_caller]
    pub fn theme(&self) -> ThemePreference {
        self.theme.preference()
    }

    /// Base classes for the current theme.
    #[track_caller]
    pub fn classes(&self) -> CardClasses {
        CardClasses::for_theme(self.theme())
    }

    /// Container classes with the caller's classes merged in after the base.
    #[track_caller]
    pub fn container_classes(&self) -> ClassList {
        self.classes().container().merge(&self.extra_classes)
    }

    pub fn labels(&self) -> CardLabels {
        CardLabels::for_title(&self.product.title)
    }

    pub fn image_state(&self) -> ImageLoadState {
        self.image
    }

    /// Feed the image-load completion signal. Returns whether the state
    /// changed.
    pub fn on_image_loaded(&mut self) -> bool {
        let advanced = self.image.mark_loaded();
        if advanced {
            self.logger
                .debug_builder("image loaded")
                .field("product_id", self.product.id.to_string())
                .emit();
        }
        advanced
    }

    /// Fire the primary action.
    ///
    /// Calls the callback once with the product id and returns `true`, or
    /// returns `false` when no callback was supplied.
    pub fn on_primary_action(&self) -> bool {
        match &self.props.on_action {
            Some(callback) => {
                self.logger
                    .debug_builder("primary action")
                    .field("product_id", self.product.id.to_string())
                    .emit();
                callback(&self.product.id);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for CardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardController")
            .field("id", &self.product.id)
            .field("image", &self.image)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use turbo_cache::Cache;
    use turbo_theme::ThemeStore;

    fn product() -> Product {
        Product::new("1", "Test Product", 800.0, 1000.0, "/test-image.jpg")
    }

    fn context() -> (Arc<ThemeStore>, ThemeContext) {
        let store = Arc::new(ThemeStore::builder(Cache::memory()).initialize());
        let ctx = ThemeContext::provide(store.clone());
        (store, ctx)
    }

    #[test]
    fn test_action_without_callback_is_noop() {
        let (_, ctx) = context();
        let card = CardController::new(product(), ctx, CardProps::new());
        assert!(!card.on_primary_action());
    }

    #[test]
    fn test_action_calls_back_once_with_id() {
        let (_, ctx) = context();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let props = CardProps::new().on_action(move |id: &ProductId| {
            sink.lock().unwrap().push(id.clone());
        });
        let card = CardController::new(product(), ctx, props);

        assert!(card.on_primary_action());
        assert_eq!(*seen.lock().unwrap(), vec![ProductId::from("1")]);

        card.on_primary_action();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_caller_classes_are_additive() {
        let (_, ctx) = context();
        let props = CardProps::new().class_name("custom-class w-full");
        let card = CardController::new(product(), ctx, props);

        let classes = card.container_classes();
        assert!(classes.contains("custom-class"));
        assert!(classes.contains("bg-white"));
        assert!(classes.contains("rounded-2xl"));
        assert_eq!(classes.iter().filter(|c| *c == "w-full").count(), 1);
    }

    #[test]
    fn test_classes_follow_theme_toggle() {
        let (store, ctx) = context();
        let card = CardController::new(product(), ctx, CardProps::new());
        assert!(card.container_classes().contains("bg-white"));

        store.toggle();
        assert!(card.container_classes().contains("bg-gray-800"));
    }

    #[test]
    fn test_image_signal() {
        let (_, ctx) = context();
        let mut card = CardController::new(product(), ctx, CardProps::new());
        assert_eq!(card.image_state(), ImageLoadState::Loading);
        assert!(card.on_image_loaded());
        assert!(!card.on_image_loaded());
        assert_eq!(card.image_state(), ImageLoadState::Loaded);
    }

    #[test]
    fn test_view_uses_props_currency() {
        let (_, ctx) = context();
        let card = CardController::new(product(), ctx, CardProps::new().currency(Currency::USD));
        assert_eq!(card.view().price_label, "$800");
    }

    #[test]
    #[should_panic(expected = "use_theme must be used inside ThemeProvider")]
    fn test_card_without_theme_panics_on_render() {
        let card = CardController::new(product(), ThemeContext::empty(), CardProps::new());
        let _ = card.classes();
    }
}
