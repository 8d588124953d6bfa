//! Loading placeholders.

use crate::classes::SKELETON;

/// Placeholder cards shown while the catalog is loading.
pub const SKELETON_COUNT: usize = 6;

/// Render one placeholder card.
pub fn render_card_skeleton() -> String {
    format!(
        r#"<div class="{}" aria-hidden="true">
    <div class="h-58 bg-gray-300"></div>
    <div class="p-4 space-y-3">
        <div class="h-5 bg-gray-300 rounded w-3/4"></div>
        <div class="h-4 bg-gray-300 rounded w-1/2"></div>
        <div class="h-4 bg-gray-300 rounded w-1/3"></div>
        <div class="h-10 bg-gray-300 rounded-lg"></div>
    </div>
</div>"#,
        SKELETON
    )
}
