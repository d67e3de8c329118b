use crate::Message;
use iced::{Color, Element};
use iced_native::widget::helpers::text;
use products_admin::Flash;

fn color(flash: &Flash) -> Color {
    if flash.is_failure() {
        Color::from_rgb8(0xdc, 0x14, 0x3c)
    } else {
        Color::from_rgb8(0x2e, 0x8b, 0x57)
    }
}

pub fn view<'a>(flash: Option<&Flash>) -> Element<'a, Message> {
    match flash {
        Some(flash) => text(flash.text().to_owned()).style(color(flash)).size(20).into(),
        None => text("").into(),
    }
}
