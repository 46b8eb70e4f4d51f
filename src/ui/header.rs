/// Page header: wordmark on the left, theme controls on the right.
///
/// The color picker is a row of round swatches, one per named theme; the
/// active one is ringed with the accent color. The dark/light toggle sits
/// next to them. Both write through the theme store via messages.

use crate::color;
use crate::state::theme::{ColorTheme, ThemePreference};
use crate::Message;
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Border, Element, Length};

const SWATCH_SIZE: f32 = 22.0;

pub fn view(prefs: ThemePreference) -> Element<'static, Message> {
    let wordmark = text("folio").size(22);

    let toggle_label = if prefs.dark { "light" } else { "dark" };
    let toggle = button(text(toggle_label).size(14))
        .padding([4, 10])
        .on_press(Message::ToggleDarkMode)
        .style(button::text);

    let mut swatches = row![].spacing(8).align_y(Alignment::Center);
    for theme in ColorTheme::ALL {
        swatches = swatches.push(swatch(theme, theme == prefs.color));
    }

    container(
        row![
            wordmark,
            Space::with_width(Length::Fill),
            swatches,
            Space::with_width(12),
            toggle,
        ]
        .align_y(Alignment::Center)
        .padding([12, 24]),
    )
    .width(Length::Fill)
    .into()
}

/// One round color swatch. Neo-brutalism stacks its three colors; every
/// other theme is a solid disc.
fn swatch(theme: ColorTheme, active: bool) -> Element<'static, Message> {
    let colors = theme.swatch();
    let bands = colors.len();

    let mut stack = column![];
    for c in colors {
        stack = stack.push(
            container(Space::new(
                SWATCH_SIZE,
                SWATCH_SIZE / bands as f32,
            ))
            .style(move |_| container::Style {
                background: Some(c.into()),
                ..Default::default()
            }),
        );
    }

    let accent = theme.accent();
    let disc = container(stack)
        .width(SWATCH_SIZE)
        .height(SWATCH_SIZE)
        .clip(true)
        .style(move |_| container::Style {
            border: Border {
                color: if active {
                    color::with_alpha(accent, 1.0)
                } else {
                    color::with_alpha(accent, 0.25)
                },
                width: if active { 2.5 } else { 1.0 },
                radius: (SWATCH_SIZE / 2.0).into(),
            },
            ..Default::default()
        });

    mouse_area(disc)
        .on_press(Message::SetColorTheme(theme))
        .into()
}
