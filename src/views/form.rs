use crate::Message as AppMessage;
use iced::{widget, Element, Length};
use iced_native::widget::{
    helpers::{button, column, container, row, text, text_input},
    tooltip::Position,
};
use products_admin::{Action, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Category,
    Description,
    Price,
    Rating,
    NoOfUsersRated,
}

#[derive(Debug, Clone)]
pub enum Message {
    Input(Field, String),
    CycleAvailable,
}

pub fn update(form: &mut FormState, message: Message) {
    match message {
        Message::Input(field, value) => {
            let slot = match field {
                Field::Id => &mut form.id,
                Field::Name => &mut form.name,
                Field::Category => &mut form.category,
                Field::Description => &mut form.description,
                Field::Price => &mut form.price,
                Field::Rating => &mut form.rating,
                Field::NoOfUsersRated => &mut form.no_of_users_rated,
            };
            *slot = value;
        }
        Message::CycleAvailable => form.available = form.available.next(),
    }
}

fn input<'a>(label: &'static str, value: &str, field: Field) -> Element<'a, AppMessage> {
    row(vec![
        container(text(label)).width(Length::Units(160)).into(),
        text_input(label, value, move |value| {
            AppMessage::Form(Message::Input(field, value))
        })
        .padding(5)
        .width(Length::Fill)
        .into(),
    ])
    .spacing(10)
    .into()
}

fn trigger<'a>(label: &'static str, action: Action) -> Element<'a, AppMessage> {
    button(text(label))
        .on_press(AppMessage::Trigger(action))
        .padding(8)
        .into()
}

pub fn view(form: &FormState) -> Element<'_, AppMessage> {
    let available = row(vec![
        container(text("Available")).width(Length::Units(160)).into(),
        widget::tooltip(
            button(text(form.available.to_string()))
                .on_press(AppMessage::Form(Message::CycleAvailable)),
            "UNKNOWN leaves availability untouched on update and unfiltered on search",
            Position::FollowCursor,
        )
        .into(),
    ])
    .spacing(10);

    let triggers = row(vec![
        trigger("Retrieve", Action::Retrieve),
        trigger("Search", Action::Search),
        trigger("Clear", Action::Clear),
        trigger("Create", Action::Create),
        trigger("Update", Action::Update),
        trigger("Delete", Action::Delete),
        trigger("Add Rating", Action::AddRating),
        trigger("Set Price", Action::UpdatePrice),
    ])
    .spacing(10);

    column(vec![
        input("ID", &form.id, Field::Id),
        input("Name", &form.name, Field::Name),
        input("Category", &form.category, Field::Category),
        input("Description", &form.description, Field::Description),
        available.into(),
        input("Price", &form.price, Field::Price),
        input("Rating", &form.rating, Field::Rating),
        input("No. of ratings", &form.no_of_users_rated, Field::NoOfUsersRated),
        triggers.into(),
    ])
    .spacing(8)
    .into()
}
