use leptos::prelude::*;

/// Decorative SVG icon served from `/icons`
#[component]
pub fn Icon(
    /// Имя иконки (без расширения .svg)
    name: &'static str,
    /// CSS классы для стилизации
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Иконки лендинга (файлы в public/icons)
pub mod icons {
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BAR_CHART: &str = "bar-chart";
    pub const BOOK_OPEN: &str = "book-open";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const DATABASE: &str = "database";
    pub const DOWNLOAD: &str = "download";
    pub const GITHUB: &str = "github";
    pub const LOCK: &str = "lock";
    pub const MENU: &str = "menu";
    pub const SPARKLES: &str = "sparkles";
    pub const TRENDING_UP: &str = "trending-up";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
