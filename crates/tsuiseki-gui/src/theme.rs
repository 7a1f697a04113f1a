//! Semantic color tokens plus the style closures built on them.
//!
//! Each style function returns a closure suitable for Iced's `.style()`
//! method, capturing the needed color tokens from a `ColorScheme`.

use iced::widget::{button, container, scrollable, text_input, toggler};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::style;

// ── ColorScheme ────────────────────────────────────────────────────

/// All semantic color tokens for the application.
///
/// Mirrors MD3's tonal surface hierarchy plus accent and status colors.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low -> high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Status
    pub success: Color,
    pub warning: Color,

    // Error
    pub error: Color,
    pub error_hover: Color,
    pub error_pressed: Color,
    pub on_error: Color,
}

impl ColorScheme {
    /// The built-in dark scheme.
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: Color::from_rgb8(0x0d, 0x0f, 0x14),
            surface: Color::from_rgb8(0x12, 0x14, 0x1a),
            surface_container_low: Color::from_rgb8(0x17, 0x1a, 0x21),
            surface_container: Color::from_rgb8(0x1c, 0x1f, 0x28),
            surface_container_high: Color::from_rgb8(0x24, 0x28, 0x33),
            surface_bright: Color::from_rgb8(0x2e, 0x33, 0x40),

            on_surface: Color::from_rgb8(0xe4, 0xe7, 0xee),
            on_surface_variant: Color::from_rgb8(0xb0, 0xb6, 0xc4),
            outline: Color::from_rgb8(0x7c, 0x83, 0x94),
            outline_variant: Color::from_rgb8(0x3a, 0x3f, 0x4d),

            primary: Color::from_rgb8(0x7a, 0xa2, 0xf7),
            primary_hover: Color::from_rgb8(0x8f, 0xb2, 0xf9),
            primary_dim: Color::from_rgb8(0x5d, 0x83, 0xd4),
            on_primary: Color::from_rgb8(0x10, 0x14, 0x20),
            primary_container: Color::from_rgb8(0x2a, 0x36, 0x55),
            on_primary_container: Color::from_rgb8(0xc6, 0xd6, 0xfc),

            success: Color::from_rgb8(0x9e, 0xce, 0x6a),
            warning: Color::from_rgb8(0xe0, 0xaf, 0x68),

            error: Color::from_rgb8(0xf7, 0x76, 0x8e),
            error_hover: Color::from_rgb8(0xf9, 0x8e, 0xa2),
            error_pressed: Color::from_rgb8(0xd4, 0x5d, 0x74),
            on_error: Color::from_rgb8(0x24, 0x0e, 0x13),
        }
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Tsuiseki",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.warning,
            danger: cs.error,
        },
    )
}

/// Parse a `#RRGGBB` accent color coming from the backend.
///
/// Profiles and shows carry optional hex color strings; anything
/// unparsable falls back to None so callers use the scheme default.
pub fn accent_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

// ── Containers ─────────────────────────────────────────────────────

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Navigation rail background.
pub fn nav_rail_bg(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Dialog container — elevated card for modals.
pub fn dialog_container(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_XL.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.3,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Calendar day cell: bordered box, primary-tinted when it is today.
pub fn day_cell(cs: &ColorScheme, is_today: bool) -> impl Fn(&Theme) -> container::Style {
    let bg = if is_today {
        Color {
            a: 0.12,
            ..cs.primary
        }
    } else {
        cs.surface_container_low
    };
    let border_color = if is_today {
        cs.primary
    } else {
        cs.outline_variant
    };
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Calendar cell outside the current month — no background, no border.
pub fn day_cell_empty() -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style::default()
}

/// Colored event chip — tinted by the show's accent color.
pub fn event_chip(color: Color) -> impl Fn(&Theme) -> container::Style {
    let bg = Color { a: 0.22, ..color };
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(color),
        border: Border {
            radius: style::EVENT_CHIP_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Subtle tinted badge for labels (log types, episode states, sources).
pub fn tinted_badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    let bg = Color { a: 0.1, ..color };
    let border_color = Color { a: 0.3, ..color };
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(color),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_SM.into(),
        },
        ..Default::default()
    }
}

/// Square initials badge shown when a show has no artwork.
pub fn initials_badge(cs: &ColorScheme, accent: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    let color = accent.unwrap_or(cs.primary);
    let bg = Color { a: 0.18, ..color };
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(color),
        border: Border {
            radius: style::RADIUS_MD.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

// ── Buttons ────────────────────────────────────────────────────────

/// Navigation rail item — icon+label with pill indicator when active.
pub fn nav_rail_item(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        if active {
            button::Style {
                background: Some(Background::Color(primary_container)),
                text_color: on_primary_container,
                border: Border {
                    radius: style::RADIUS_XL.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        } else {
            match status {
                button::Status::Hovered => button::Style {
                    background: Some(Background::Color(surface_bright)),
                    text_color: on_surface,
                    border: Border {
                        radius: style::RADIUS_XL.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                },
                _ => button::Style {
                    background: None,
                    text_color: on_surface_variant,
                    border: Border {
                        radius: style::RADIUS_XL.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                },
            }
        }
    }
}

/// Primary action button (Save, Track, etc.).
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed => primary_dim,
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Danger action button (Delete confirmation, etc.).
pub fn danger_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let error = cs.error;
    let error_hover = cs.error_hover;
    let error_pressed = cs.error_pressed;
    let on_error = cs.on_error;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => error_hover,
            button::Status::Pressed => error_pressed,
            _ => error,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_error,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Ghost / outlined button — transparent bg, border outline.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button — no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// List item button — card-like with selection highlight.
pub fn list_item(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let surface_container = cs.surface_container;
    let outline_variant = cs.outline_variant;
    let primary = cs.primary;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, border_color) = if selected {
            (Some(Background::Color(surface_container_high)), primary)
        } else {
            match status {
                button::Status::Hovered => {
                    (Some(Background::Color(surface_container)), outline_variant)
                }
                _ => (None, Color::TRANSPARENT),
            }
        };

        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                color: border_color,
                width: if selected { 1.0 } else { 0.0 },
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

// ── Inputs ─────────────────────────────────────────────────────────

/// Custom text input styling that adapts to theme.
pub fn text_input_style(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let primary = cs.primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_container_low = cs.surface_container_low;
    let on_surface_variant = cs.on_surface_variant;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => primary,
            text_input::Status::Hovered => outline,
            _ => outline_variant,
        };
        text_input::Style {
            background: Background::Color(surface_container_low),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            icon: on_surface_variant,
            placeholder: outline,
            value: on_surface,
            selection: primary,
        }
    }
}

/// MD3-style toggler: primary track when on, outline track when off.
pub fn toggler_style(cs: &ColorScheme) -> impl Fn(&Theme, toggler::Status) -> toggler::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let on_primary = cs.on_primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;

    move |_theme, status| match status {
        toggler::Status::Active { is_toggled } | toggler::Status::Disabled { is_toggled } => {
            let disabled = matches!(status, toggler::Status::Disabled { .. });
            let alpha = if disabled { 0.38 } else { 1.0 };
            let (track, knob) = if is_toggled {
                (primary, on_primary)
            } else {
                (outline_variant, outline)
            };
            toggler::Style {
                background: Background::Color(Color { a: alpha, ..track }),
                foreground: Background::Color(Color { a: alpha, ..knob }),
                background_border_width: 1.0,
                background_border_color: Color {
                    a: alpha,
                    ..outline_variant
                },
                foreground_border_width: 0.0,
                foreground_border_color: Color::TRANSPARENT,
                text_color: Some(on_surface),
                border_radius: None,
                padding_ratio: 0.25,
            }
        }
        toggler::Status::Hovered { is_toggled } => {
            let (track, knob) = if is_toggled {
                (primary_hover, on_primary)
            } else {
                (surface_bright, on_surface)
            };
            toggler::Style {
                background: Background::Color(track),
                foreground: Background::Color(knob),
                background_border_width: 1.0,
                background_border_color: outline_variant,
                foreground_border_width: 0.0,
                foreground_border_color: Color::TRANSPARENT,
                text_color: Some(on_surface),
                border_radius: None,
                padding_ratio: 0.25,
            }
        }
    }
}

// ── Scrollbars ─────────────────────────────────────────────────────

/// Overlay scrollbar: thin transparent rail, pill scroller that becomes
/// more visible on hover/drag.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_FULL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_color_parses_hex() {
        let c = accent_color("#ff8000").unwrap();
        assert!((c.r - 1.0).abs() < 0.01);
        assert!((c.g - 0.5).abs() < 0.01);
        assert!((c.b - 0.0).abs() < 0.01);
    }

    #[test]
    fn accent_color_rejects_garbage() {
        assert!(accent_color("blue").is_none());
        assert!(accent_color("#12345").is_none());
        assert!(accent_color("").is_none());
    }

    #[test]
    fn accent_color_rejects_multibyte_input() {
        // Six bytes but not six ASCII chars; must not panic.
        assert!(accent_color("\u{1F600}AA").is_none());
        assert!(accent_color("#\u{00E9}\u{00E9}ff").is_none());
    }
}
