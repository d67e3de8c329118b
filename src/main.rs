#![deny(clippy::all, clippy::perf)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::items_after_statements)]

mod views;

use iced::{executor, Application, Command, Element, Length, Settings};
use iced_native::widget::helpers::{
    button, column, container, horizontal_rule, row, text, text_input,
};
use products_admin::{utils::Result, Action, Client, Config, FormState, Reply};
use std::{io, mem, sync::Arc};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use views::{flash, form, results};

pub fn main() -> iced::Result {
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stdout());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .init();

    App::run(Settings {
        window: iced::window::Settings {
            size: (1280, 860),
            resizable: true,
            decorations: true,
            ..Default::default()
        },
        default_text_size: 17,
        antialiasing: true,
        ..Settings::with_flags(Config::from_env())
    })
}

#[derive(Debug, Clone)]
pub enum Message {
    HostChanged(String),
    Connect,

    Form(form::Message),
    Trigger(Action),
    Completed(Action, Result<Reply>),
}

struct App {
    client: Arc<Client>,
    host: String,

    form: FormState,
    /// Requests sent and not answered yet; only drives the busy marker.
    in_flight: usize,
}

impl Application for App
where
    Self: 'static,
{
    type Executor = executor::Default;
    type Message = Message;
    type Theme = iced::Theme;
    type Flags = Config;

    fn new(config: Self::Flags) -> (Self, Command<Self::Message>) {
        info!(api = %config.api, "starting");
        (
            Self {
                client: Arc::new(config.client()),
                host: config.api,
                form: FormState::default(),
                in_flight: 0,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        let state = if self.in_flight > 0 { "Working" } else { "Ready" };
        format!("Products Admin - {state}")
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::HostChanged(host) => {
                self.host = host;
                Command::none()
            }
            Message::Connect => {
                let config = Config {
                    api: self.host.clone(),
                };
                info!(api = %config.api, "switching backend");
                self.client = Arc::new(config.client());
                Command::none()
            }
            Message::Form(message) => {
                form::update(&mut self.form, message);
                Command::none()
            }
            Message::Trigger(action) => self.trigger(action),
            Message::Completed(action, outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.form = mem::take(&mut self.form).apply(action, outcome);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let header = row(vec![
            text_input("API base URL", &self.host, Message::HostChanged)
                .padding(5)
                .into(),
            button(text("Connect")).on_press(Message::Connect).into(),
        ])
        .spacing(10);

        let busy = if self.in_flight > 0 {
            text(format!("{} request(s) in flight", self.in_flight))
        } else {
            text("")
        };

        let content = column(vec![
            header.into(),
            horizontal_rule(10).into(),
            form::view(&self.form),
            flash::view(self.form.flash.as_ref()),
            busy.into(),
            horizontal_rule(10).into(),
            results::view(self.form.results.as_ref()),
        ])
        .spacing(10)
        .padding(20);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Self::Theme {
        Self::Theme::Dark
    }
}

impl App {
    /// One click, one request. Nothing in flight is cancelled; the last
    /// answer to arrive wins the form.
    fn trigger(&mut self, action: Action) -> Command<Message> {
        match self.form.call(action) {
            Ok(None) => {
                self.form.clear();
                Command::none()
            }
            Ok(Some(call)) => {
                debug!(%action, ?call, "dispatch");
                self.in_flight += 1;
                let client = self.client.clone();
                Command::perform(async move { call.send(&client).await }, move |outcome| {
                    Message::Completed(action, outcome)
                })
            }
            Err(error) => {
                self.form = mem::take(&mut self.form).reject(action, &error);
                Command::none()
            }
        }
    }
}
