/// Fabric swatches
///
/// One colored square per variant in a wrapping row. The selected one gets
/// a short teal underline.
use iced::widget::{button, column, container, Space};
use iced::{Background, Border, Color, Element, Length, Padding};
use iced_aw::Wrap;

use crate::state::catalog::Variant;
use crate::Message;

/// Edge length of a swatch
const SWATCH_SIZE: f32 = 37.0;

/// Fallback for swatches with an unparsable color
const FALLBACK_RGB: (u8, u8, u8) = (0x99, 0x99, 0x99);

/// Build the swatch row for `variants`, marking `selected`
pub fn swatches(variants: &[Variant], selected: usize) -> Element<'_, Message> {
    let elements: Vec<Element<'_, Message>> = variants
        .iter()
        .enumerate()
        .map(|(index, variant)| swatch(variant, index, index == selected))
        .collect();

    Wrap::with_elements(elements).into()
}

fn swatch(variant: &Variant, index: usize, selected: bool) -> Element<'_, Message> {
    let color = swatch_color(variant);

    let square = button(Space::new(SWATCH_SIZE, SWATCH_SIZE))
        .padding(0)
        .on_press(Message::VariantSelected(index))
        .style(move |_theme, _status| button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        });

    let underline: Element<'_, Message> = if selected {
        container(Space::new(SWATCH_SIZE * 0.7, 3.0))
            .style(|_theme| container::Style {
                background: Some(Background::Color(Color::from_rgba8(73, 199, 186, 0.78))),
                border: Border {
                    radius: 2.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    } else {
        Space::new(SWATCH_SIZE * 0.7, 3.0).into()
    };

    container(
        column![square, container(underline).center_x(Length::Fixed(SWATCH_SIZE))].spacing(4),
    )
    .padding(Padding {
        top: 0.0,
        right: 5.0,
        bottom: 5.0,
        left: 0.0,
    })
    .into()
}

/// Swatch fill: the variant color at 70% opacity
fn swatch_color(variant: &Variant) -> Color {
    let (r, g, b) = variant.rgb().unwrap_or(FALLBACK_RGB);
    Color::from_rgba8(r, g, b, 0.7)
}
