use json::{json, Value};
use products_admin::{
    Action, Availability, Call, Error, Flash, FormState, Product, ProductId, Reply,
};
use reqwest::StatusCode;

fn product(id: i64, name: &str, rating: Option<f64>) -> Product {
    Product {
        id: ProductId(id.to_string()),
        name: name.into(),
        category: "garden".into(),
        description: format!("{name} for the garden"),
        available: id % 2 == 0,
        price: 10.5,
        rating,
        no_of_users_rated: 3,
    }
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<_> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[test]
fn create_payload_has_seven_coerced_fields() {
    let form = FormState {
        name: "Rake".into(),
        category: "garden".into(),
        description: "steel".into(),
        available: Availability::True,
        price: "19.99".into(),
        rating: "4".into(),
        no_of_users_rated: "2".into(),
        ..FormState::default()
    };

    let body = json::to_value(form.create_payload().unwrap()).unwrap();
    assert_eq!(
        keys(&body),
        [
            "available",
            "category",
            "description",
            "name",
            "no_of_users_rated",
            "price",
            "rating"
        ]
    );
    assert_eq!(body["price"], json!(19.99));
    assert_eq!(body["rating"], json!(4.0));
    assert_eq!(body["no_of_users_rated"], json!(2));
    assert_eq!(body["available"], json!(true));
}

#[test]
fn create_payload_unknown_availability_is_false() {
    let form = FormState {
        available: Availability::Unknown,
        ..FormState::default()
    };
    assert!(!form.create_payload().unwrap().available);
}

#[test]
fn update_payload_is_sparse() {
    let form = FormState {
        id: "9".into(),
        description: "new text".into(),
        rating: " ".into(),
        ..FormState::default()
    };
    let body = json::to_value(form.update_payload().unwrap()).unwrap();
    assert_eq!(body, json!({ "description": "new text" }));

    let form = FormState {
        available: Availability::False,
        no_of_users_rated: "7".into(),
        ..form
    };
    let body = json::to_value(form.update_payload().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "description": "new text", "available": false, "no_of_users_rated": 7 })
    );
}

#[test]
fn write_then_read_round_trips() {
    let original = Product {
        price: 19.99,
        rating: Some(4.256),
        available: true,
        ..product(4, "Hose", None)
    };
    let mut form = FormState::default();
    form.write_product(&original);

    assert_eq!(form.id, "4");
    assert_eq!(form.available, Availability::True);
    assert_eq!(form.rating, "4.26");

    let read = form.create_payload().unwrap();
    assert_eq!(read.name, original.name);
    assert_eq!(read.category, original.category);
    assert_eq!(read.description, original.description);
    assert_eq!(read.available, original.available);
    assert_eq!(read.price, Some(original.price));
    assert_eq!(read.rating, Some(4.26));
    assert_eq!(read.no_of_users_rated, Some(original.no_of_users_rated));
}

#[test]
fn missing_rating_writes_blank() {
    let mut form = FormState {
        rating: "3.00".into(),
        ..FormState::default()
    };
    form.write_product(&product(1, "Spade", None));
    assert_eq!(form.rating, "");
    assert_eq!(form.available, Availability::False);
}

#[test]
fn search_query_order() {
    let form = FormState {
        name: "x".into(),
        category: "y".into(),
        available: Availability::True,
        rating: "4".into(),
        price: "10".into(),
        ..FormState::default()
    };
    assert_eq!(
        form.search_query().to_string(),
        "name=x&category=y&available=True&rating=4&price=10"
    );

    let form = FormState {
        available: Availability::False,
        ..form
    };
    assert_eq!(
        form.search_query().to_string(),
        "name=x&category=y&rating=4&price=10"
    );
    assert!(FormState::default().search_query().is_empty());
}

#[test]
fn search_results_mirror_first() {
    let products = [
        product(1, "Rake", None),
        product(2, "Hose", Some(4.2)),
        product(3, "Spade", Some(1.0)),
    ];
    let form = FormState::default().apply(Action::Search, Ok(Reply::Products(products.to_vec())));

    let table = form.results.as_ref().unwrap();
    assert_eq!(table.len(), 3);
    let ids: Vec<_> = table.rows().iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, ["row_0", "row_1", "row_2"]);
    let names: Vec<_> = table.rows().iter().map(|row| row.cells[1].as_str()).collect();
    assert_eq!(names, ["Rake", "Hose", "Spade"]);

    let mut expected = FormState::default();
    expected.write_product(&products[0]);
    assert_eq!(form.name, expected.name);
    assert_eq!(form.id, "1");
    assert_eq!(form.rating, "");
    assert_eq!(form.flash, Some(Flash::Success("Success".into())));
}

#[test]
fn retrieve_failure_blanks_form() {
    let mut form = FormState::default();
    form.write_product(&product(2, "Hose", Some(4.2)));

    let error = Error::remote(StatusCode::NOT_FOUND, Some("Product not found".into()));
    let form = form.apply(Action::Retrieve, Err(error));

    assert_eq!(form.flash, Some(Flash::Failure("Product not found".into())));
    assert_eq!(form.name, "");
    assert_eq!(form.category, "");
    assert_eq!(form.description, "");
    assert_eq!(form.available, Availability::Unknown);
    assert_eq!(form.price, "");
    assert_eq!(form.rating, "");
    assert_eq!(form.no_of_users_rated, "");
}

#[test]
fn other_failures_keep_form() {
    let mut form = FormState::default();
    form.write_product(&product(2, "Hose", None));

    let error = Error::remote(StatusCode::BAD_REQUEST, Some("bad".into()));
    let form = form.apply(Action::Update, Err(error));
    assert_eq!(form.name, "Hose");
    assert_eq!(form.flash, Some(Flash::Failure("bad".into())));
}

#[test]
fn clear_blanks_everything() {
    let mut form = FormState::default();
    form.write_product(&product(2, "Hose", None));
    form.success("Success");

    assert_eq!(form.call(Action::Clear).unwrap(), None);
    form.clear();
    assert_eq!(form, FormState::default());
}

#[test]
fn calls_need_an_id() {
    let form = FormState::default();
    for action in [
        Action::Retrieve,
        Action::Update,
        Action::Delete,
        Action::AddRating,
        Action::UpdatePrice,
    ] {
        assert!(matches!(form.call(action), Err(Error::MissingId)), "{action}");
    }

    let form = FormState {
        id: " 5 ".into(),
        rating: "3".into(),
        ..FormState::default()
    };
    assert_eq!(
        form.call(Action::AddRating).unwrap(),
        Some(Call::AddRating("5".into(), 3))
    );
    assert_eq!(
        form.call(Action::Delete).unwrap(),
        Some(Call::Delete("5".into()))
    );
}

#[test]
fn add_rating_needs_a_rating() {
    let form = FormState {
        id: "5".into(),
        ..FormState::default()
    };
    let error = form.call(Action::AddRating).unwrap_err();
    assert_eq!(error.to_string(), "rating must be a number, got ``");
}

#[test]
fn out_of_range_integers_are_rejected() {
    let form = FormState {
        id: "1".into(),
        rating: "1e30".into(),
        no_of_users_rated: "99999999999999999999".into(),
        ..FormState::default()
    };

    let error = form.call(Action::AddRating).unwrap_err();
    assert_eq!(error.to_string(), "rating must be a number, got `1e30`");

    let error = form.create_payload().unwrap_err();
    assert!(matches!(
        error,
        Error::InvalidNumber { field: "no_of_users_rated", .. }
    ));
    assert!(form.update_payload().is_err());
}
