use crate::Message;
use iced::{Element, Length};
use iced_native::widget::helpers::{column, container, row, scrollable, text};
use products_admin::{render::COLUMNS, ResultTable};

fn cells<'a>(cells: impl Iterator<Item = String>) -> Element<'a, Message> {
    row(cells
        .map(|cell| {
            container(text(cell))
                .width(Length::FillPortion(1))
                .padding(4)
                .into()
        })
        .collect())
    .width(Length::Fill)
    .into()
}

pub fn view(table: Option<&ResultTable>) -> Element<'_, Message> {
    let Some(table) = table else {
        return text("").into();
    };
    if table.is_empty() {
        return text("No products matched").into();
    }

    let header = cells(COLUMNS.iter().map(|column| (*column).to_owned()));
    let rows: Vec<_> = table
        .rows()
        .iter()
        .map(|row| cells(row.cells.iter().cloned()))
        .collect();

    column(vec![
        header,
        scrollable(column(rows).spacing(2))
            .height(Length::Fill)
            .into(),
    ])
    .spacing(5)
    .into()
}
