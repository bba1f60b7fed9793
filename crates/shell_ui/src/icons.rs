//! Centralized icon abstraction for the portfolio shell.
//!
//! Semantic icon identifiers plus a single SVG renderer, so shell components and
//! window content never embed raw icon strings. The catalog is a subset of Fluent
//! UI System Icons (regular 24px) mapped to the shell's own semantics.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used across the shell and window content.
pub enum IconName {
    /// Terminal window icon.
    Terminal,
    /// Finder / folder icon.
    Folder,
    /// Browser / globe icon.
    Globe,
    /// Resume document icon.
    DocumentText,
    /// Plain-text notes icon.
    Notepad,
    /// Photo viewer icon.
    Photo,
    /// Contact / mail icon.
    Mail,
    /// Trash can icon.
    Trash,
    /// Network status icon.
    WifiOn,
    /// Battery status icon.
    BatteryFull,
    /// Checkmark icon.
    Checkmark,
    /// Flag icon.
    Flag,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Folder => "folder",
            Self::Globe => "globe",
            Self::DocumentText => "document-text",
            Self::Notepad => "notepad",
            Self::Photo => "photo",
            Self::Mail => "mail",
            Self::Trash => "trash",
            Self::WifiOn => "wifi-on",
            Self::BatteryFull => "battery-full",
            Self::Checkmark => "checkmark",
            Self::Flag => "flag",
        }
    }

    /// Raw SVG body markup for the icon (24px viewBox).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM4.5 8.5v9.25c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V8.5h-15Zm0-1.5h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7Zm6.28 4.28a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm2.22 5.97h4a.75.75 0 0 0 0-1.5h-4a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Globe => {
                r#"<path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm8.46 9.25h-3.73a15.6 15.6 0 0 0-1.2-5.53 8.52 8.52 0 0 1 4.93 5.53Zm-8.46 9.22c-.85-.54-1.64-1.9-2.17-3.82-.27-.96-.46-2-.56-3.1h5.46c-.1 1.1-.29 2.14-.56 3.1-.53 1.92-1.32 3.28-2.17 3.82Zm-2.73-8.47c.1-1.1.29-2.14.56-3.1.53-1.92 1.32-3.28 2.17-3.82.85.54 1.64 1.9 2.17 3.82.27.96.46 2 .56 3.1H9.27Zm-.8-6.28a15.6 15.6 0 0 0-1.2 5.53H3.54a8.52 8.52 0 0 1 4.93-5.53Zm-4.93 7.03h3.73c.08 2.03.5 3.95 1.2 5.53a8.52 8.52 0 0 1-4.93-5.53Zm12.99 5.53c.7-1.58 1.12-3.5 1.2-5.53h3.73a8.52 8.52 0 0 1-4.93 5.53Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Notepad => {
                r#"<path d="M7.75 2a.75.75 0 0 1 .75.75V4h2.75V2.75a.75.75 0 0 1 1.5 0V4h2.75V2.75a.75.75 0 0 1 1.5 0V4h.75C19.55 4 21 5.46 21 7.25v10.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V7.25C3 5.45 4.46 4 6.25 4H7V2.75A.75.75 0 0 1 7.75 2ZM4.5 7.25v10.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V7.25c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75Zm3.25 3.5a.75.75 0 0 1 0-1.5h8.5a.75.75 0 0 1 0 1.5h-8.5Zm0 3.25a.75.75 0 0 1 0-1.5h8.5a.75.75 0 0 1 0 1.5h-8.5Zm0 3.25a.75.75 0 0 1 0-1.5h5.5a.75.75 0 0 1 0 1.5h-5.5Z"/>"#
            }
            Self::Photo => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.54 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75v11.5c0 .34-.1.66-.27.94l-5.17-5.09a2.75 2.75 0 0 0-3.86 0l-5.17 5.09a1.74 1.74 0 0 1-.28-.94V6.25Zm11.25 2a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0Zm-4.45 6.42a1.25 1.25 0 0 1 1.75 0l5.05 4.96c-.1.04-.23.06-.35.06H6.25c-.12 0-.24-.02-.36-.06l5.06-4.96Z"/>"#
            }
            Self::Mail => {
                r#"<path d="M5.25 4h13.5C20.55 4 22 5.46 22 7.25v9.5c0 1.8-1.46 3.25-3.25 3.25H5.25A3.25 3.25 0 0 1 2 16.75v-9.5C2 5.45 3.46 4 5.25 4ZM3.5 7.25v.55l8.15 4.68c.22.12.48.12.7 0l8.15-4.68v-.55c0-.97-.78-1.75-1.75-1.75H5.25c-.97 0-1.75.78-1.75 1.75Zm0 2.28v7.22c0 .97.78 1.75 1.75 1.75h13.5c.97 0 1.75-.78 1.75-1.75V9.53l-7.4 4.25c-.68.39-1.52.39-2.2 0L3.5 9.53Z"/>"#
            }
            Self::Trash => {
                r#"<path d="M10 2.5c-.83 0-1.5.67-1.5 1.5v.5H4.75a.75.75 0 0 0 0 1.5h.56l1.2 13.25A2.75 2.75 0 0 0 9.25 22h5.5c1.43 0 2.62-1.1 2.74-2.52L18.69 6h.56a.75.75 0 0 0 0-1.5H15.5V4c0-.83-.67-1.5-1.5-1.5h-4ZM14 4.5h-4V4h4v.5ZM6.82 6h10.36l-1.18 13.07c-.06.64-.6 1.13-1.25 1.13h-5.5c-.65 0-1.19-.5-1.25-1.13L6.82 6Zm3.43 3.25c.41 0 .75.34.75.75v6.5a.75.75 0 0 1-1.5 0V10c0-.41.34-.75.75-.75Zm4.25.75a.75.75 0 0 0-1.5 0v6.5a.75.75 0 0 0 1.5 0V10Z"/>"#
            }
            Self::WifiOn => {
                r#"<path d="M17.74 10.75c.6.6 1.1 1.3 1.5 2.07a.75.75 0 1 1-1.34.68 6.56 6.56 0 0 0-11.71-.02.75.75 0 1 1-1.34-.67 8.06 8.06 0 0 1 12.9-2.06Zm-2.1 3.07c.45.45.82 1 1.08 1.58a.75.75 0 1 1-1.38.6A3.6 3.6 0 0 0 8.75 16a.75.75 0 1 1-1.37-.6 5.1 5.1 0 0 1 8.26-1.57Zm4.8-5.54c.52.5 1 1.09 1.42 1.7a.75.75 0 1 1-1.24.85 10.45 10.45 0 0 0-17.23 0 .75.75 0 0 1-1.23-.86 11.95 11.95 0 0 1 18.29-1.69Zm-7.38 8.16a1.5 1.5 0 1 1-2.12 2.12 1.5 1.5 0 0 1 2.12-2.12Z"/>"#
            }
            Self::BatteryFull => {
                r#"<path d="M4.25 7A2.25 2.25 0 0 0 2 9.25v5.5C2 15.99 3 17 4.25 17h13.5c1.24 0 2.25-1 2.25-2.25v-5.5C20 8.01 19 7 17.75 7H4.25ZM3.5 9.25c0-.41.34-.75.75-.75h13.5c.41 0 .75.34.75.75v5.5c0 .41-.34.75-.75.75H4.25a.75.75 0 0 1-.75-.75v-5.5Zm1.5.75h12v4H5v-4Zm16.25 0c.41 0 .75.34.75.75v2.5a.75.75 0 0 1-1.5 0v-2.5c0-.41.34-.75.75-.75Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::Flag => {
                r#"<path d="M4.75 2.5c.41 0 .75.34.75.75V4h13.25c.62 0 .97.7.6 1.2L16.44 9l2.91 3.8c.37.5.02 1.2-.6 1.2H5.5v6.25a.75.75 0 0 1-1.5 0V3.25c0-.41.34-.75.75-.75ZM5.5 5.5v7h11.73l-2.34-3.04a.75.75 0 0 1 0-.92L17.23 5.5H5.5Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (status strips, check rows).
    Xs,
    /// 16px standard icon (menus and chrome).
    #[default]
    Sm,
    /// 20px medium icon (window headers).
    Md,
    /// 32px large icon (dock tiles).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized shell catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_unique() {
        let all = [
            IconName::Terminal,
            IconName::Folder,
            IconName::Globe,
            IconName::DocumentText,
            IconName::Notepad,
            IconName::Photo,
            IconName::Mail,
            IconName::Trash,
            IconName::WifiOn,
            IconName::BatteryFull,
            IconName::Checkmark,
            IconName::Flag,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert_ne!(a.token(), b.token());
            }
        }
    }

    #[test]
    fn icon_sizes_scale_up() {
        assert!(IconSize::Xs.px() < IconSize::Sm.px());
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert!(IconSize::Md.px() < IconSize::Lg.px());
    }
}
