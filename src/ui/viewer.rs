/// Large-image presentation: the inline expanded view and the fullscreen
/// overlay.
///
/// The overlay follows the stacked-modal pattern: the page is the base
/// layer, a dimmed `mouse_area` above it catches background clicks, and
/// the image itself sits in an opaque layer so clicking it does not fall
/// through to the backdrop.

use crate::color;
use crate::state::data::JobEntry;
use crate::state::theme::ThemePreference;
use crate::state::viewer::Selection;
use crate::{image_or_placeholder, ImageCache, ImageKey, Message};
use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Border, Color, ContentFit, Element, Length};

/// The inline large view shown under an expanded job section.
/// Clicking the image promotes it to fullscreen.
pub fn expanded(
    job: &JobEntry,
    image_index: usize,
    images: &ImageCache,
    prefs: ThemePreference,
) -> Element<'static, Message> {
    let handle = image_or_placeholder(images, ImageKey::photo(job.index, image_index));
    let accent = prefs.color.accent();

    let large = container(
        image(handle)
            .width(Length::Fill)
            .height(420)
            .content_fit(ContentFit::Contain),
    )
    .width(Length::Fill)
    .padding(8)
    .style(move |_| container::Style {
        border: Border {
            color: color::with_alpha(accent, 0.6),
            width: 2.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    });

    column![
        mouse_area(large).on_press(Message::LargeImageClicked),
        caption_row(job, image_index, prefs),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .into()
}

/// Layer the fullscreen overlay for `selection` over the page.
pub fn fullscreen<'a>(
    base: Element<'a, Message>,
    job: &JobEntry,
    selection: Selection,
    images: &ImageCache,
    prefs: ThemePreference,
) -> Element<'a, Message> {
    let handle = image_or_placeholder(images, ImageKey::photo(job.index, selection.image));

    let content = column![
        image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain),
        caption_row(job, selection.image, prefs),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    // The padded ring around the content is the clickable backdrop
    let backdrop = mouse_area(
        center(opaque(content)).padding(56).style(|_| container::Style {
            background: Some(
                Color {
                    a: 0.85,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..Default::default()
        }),
    )
    .on_press(Message::BackgroundClicked);

    stack![base, opaque(backdrop)].into()
}

/// Caption line with the prev/next chevrons and the image position.
fn caption_row(
    job: &JobEntry,
    image_index: usize,
    prefs: ThemePreference,
) -> Element<'static, Message> {
    let total = job.images.len();
    let caption = job.caption(image_index);

    let position = text(format!("{} / {}", image_index + 1, total.max(1)))
        .size(13)
        .color(prefs.muted_text());

    row![
        chevron("‹", Message::PreviousImage, image_index > 0),
        column![
            text(caption.to_string()).size(14),
            position,
        ]
        .spacing(2)
        .align_x(Alignment::Center),
        chevron("›", Message::NextImage, image_index + 1 < total),
    ]
    .spacing(18)
    .align_y(Alignment::Center)
    .into()
}

fn chevron(label: &'static str, message: Message, enabled: bool) -> Element<'static, Message> {
    let mut b = button(text(label).size(22)).padding([2, 10]).style(button::text);
    if enabled {
        b = b.on_press(message);
    }
    b.into()
}
