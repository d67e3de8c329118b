use crate::model::Product;
use maud::html;

pub const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Category",
    "Description",
    "Available",
    "Price",
    "Rating",
];

pub const NOT_APPLICABLE: &str = "Not-Applicable";

pub const fn available_text(available: bool) -> &'static str {
    if available {
        "True"
    } else {
        "False"
    }
}

pub fn rating_text(rating: Option<f64>) -> String {
    rating.map_or_else(|| NOT_APPLICABLE.to_owned(), |rating| format!("{rating:.2}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Positional identifier, `row_{index}`.
    pub id: String,
    pub cells: [String; 7],
}

/// Search results laid out as display text, one row per product in the
/// order the backend returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<Row>,
}

impl ResultTable {
    pub fn new(products: &[Product]) -> Self {
        let rows = products
            .iter()
            .enumerate()
            .map(|(index, product)| Row {
                id: format!("row_{index}"),
                cells: [
                    product.id.to_string(),
                    product.name.clone(),
                    product.category.clone(),
                    product.description.clone(),
                    available_text(product.available).to_owned(),
                    product.price.to_string(),
                    rating_text(product.rating),
                ],
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        html! {
            table class="table table-striped" cellpadding="10" {
                thead {
                    tr {
                        @for column in COLUMNS {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for row in &self.rows {
                        tr id=(row.id) {
                            @for cell in &row.cells {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
        .into_string()
    }
}
