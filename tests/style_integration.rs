// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_books::ui::design_tokens::{palette, sizing, spacing};
    use iced_books::ui::styles::{button, container};
    use iced_books::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [
                Status::Active,
                Status::Hovered,
                Status::Pressed,
                Status::Disabled,
            ] {
                let _ = button::primary(&theme, status);
                let _ = button::secondary(&theme, status);
            }
            let _ = container::panel(&theme);
            let _ = container::card(&theme);
            let _ = container::cover_frame(&theme);
            let _ = container::read_badge(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        assert!(sizing::COVER_WIDTH > 0.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&ThemeMode::Light.to_theme());
        let dark = ColorScheme::for_theme(&ThemeMode::Dark.to_theme());

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);
        // So should text colors
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
