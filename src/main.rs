mod counter;
mod diagnostics;
mod http;
mod ui;

use std::fmt::{self, Display};

use iced::widget::{column, container, text_editor};
use iced::{Element, Length, Task};

use counter::TapCounter;
use http::client::execute;
use http::method::HttpMethod;
use http::render::{self, RenderedExchange};
use http::request::{ExchangeInput, build};
use http::response::Outcome;
use ui::style;

fn main() -> iced::Result {
    iced::application("Demobench", update, view)
        .theme(|_| style::app_theme())
        .window_size((900.0, 720.0))
        .run_with(|| (App::default(), Task::none()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    HttpClient,
    Diagnostics,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::HttpClient, Screen::Diagnostics];
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Screen::Home => "Home",
            Screen::HttpClient => "HTTP Client",
            Screen::Diagnostics => "Diagnostics",
        };
        write!(f, "{label}")
    }
}

struct App {
    screen: Screen,
    counter: TapCounter,
    milestone: Option<u32>,
    diagnostics_report: String,
    method: HttpMethod,
    url: String,
    headers_editor: text_editor::Content,
    body_editor: text_editor::Content,
    in_flight: bool,
    rendered: Option<RenderedExchange>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            counter: TapCounter::new(),
            milestone: None,
            diagnostics_report: diagnostics::report(),
            method: HttpMethod::Get,
            url: String::new(),
            headers_editor: text_editor::Content::with_text(
                "{\n  \"Content-Type\": \"application/json\"\n}",
            ),
            body_editor: text_editor::Content::with_text("{\n  \"key\": \"value\"\n}"),
            in_flight: false,
            rendered: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
    TapPressed,
    MilestoneDismissed,
    CounterReset,
    DiagnosticsRefreshed,
    MethodSelected(HttpMethod),
    UrlChanged(String),
    HeadersEdited(text_editor::Action),
    BodyEdited(text_editor::Action),
    SendPressed,
    ExchangeFinished(Outcome),
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ScreenSelected(screen) => {
            app.screen = screen;
            Task::none()
        }
        Message::TapPressed => {
            if let Some(milestone) = app.counter.tap() {
                app.milestone = Some(milestone);
            }
            Task::none()
        }
        Message::MilestoneDismissed => {
            app.milestone = None;
            Task::none()
        }
        Message::CounterReset => {
            app.counter.reset();
            app.milestone = None;
            Task::none()
        }
        Message::DiagnosticsRefreshed => {
            app.diagnostics_report = diagnostics::report();
            Task::none()
        }
        Message::MethodSelected(method) => {
            app.method = method;
            Task::none()
        }
        Message::UrlChanged(url) => {
            app.url = url;
            Task::none()
        }
        Message::HeadersEdited(action) => {
            app.headers_editor.perform(action);
            Task::none()
        }
        Message::BodyEdited(action) => {
            app.body_editor.perform(action);
            Task::none()
        }
        Message::SendPressed => {
            if app.in_flight {
                return Task::none();
            }

            let input = ExchangeInput {
                method: app.method,
                url: app.url.clone(),
                headers: app.headers_editor.text(),
                body: editor_body(app.body_editor.text()),
            };

            match build(&input) {
                Ok(prepared) => {
                    app.in_flight = true;
                    app.rendered = None;
                    Task::perform(execute(prepared), Message::ExchangeFinished)
                }
                Err(err) => {
                    app.rendered = Some(render::render_invalid(&err));
                    Task::none()
                }
            }
        }
        Message::ExchangeFinished(outcome) => {
            // Released on every exit path, success or failure.
            app.in_flight = false;
            app.rendered = Some(render::render(&outcome));
            Task::none()
        }
    }
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view(app.screen);

    let screen: Element<'_, Message> = match app.screen {
        Screen::Home => ui::counter_panel::view(app.counter.count(), app.milestone),
        Screen::HttpClient => client_screen(app),
        Screen::Diagnostics => ui::diagnostics_panel::view(&app.diagnostics_report),
    };

    let layout = column![
        header,
        container(screen).width(Length::Fill).height(Length::Fill)
    ]
    .spacing(1)
    .width(Length::Fill)
    .height(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}

fn client_screen(app: &App) -> Element<'_, Message> {
    column![
        ui::request_bar::view(app.method, &app.url, app.in_flight),
        ui::headers_editor::view(&app.headers_editor),
        ui::body_editor::view(&app.body_editor),
        ui::response_panel::view(app.rendered.as_ref(), app.in_flight),
    ]
    .spacing(14)
    .padding(16)
    .height(Length::Fill)
    .into()
}

/// The editor yields one synthetic trailing newline even when visually
/// empty; strip exactly that and leave any whitespace the user typed.
fn editor_body(text: String) -> String {
    match text.strip_suffix('\n') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::render::Tone;
    use crate::http::response::{FailureKind, HttpResponse};

    fn success_outcome() -> Outcome {
        Outcome::Response(HttpResponse {
            status: 200,
            reason: "OK".to_string(),
            elapsed_ms: 7,
            headers: Vec::new(),
            body: b"done".to_vec(),
        })
    }

    fn failure_outcome() -> Outcome {
        Outcome::Failure {
            kind: FailureKind::Transport,
            elapsed_ms: 30000,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn send_is_ignored_while_a_call_is_outstanding() {
        let mut app = App::default();
        app.in_flight = true;
        // An invalid URL would render inline if the press got past the
        // guard; staying `None` proves the early return.
        app.url = "not a url".to_string();

        let _ = update(&mut app, Message::SendPressed);

        assert!(app.in_flight);
        assert!(app.rendered.is_none());
    }

    #[test]
    fn finished_exchange_releases_guard_on_success() {
        let mut app = App::default();
        app.in_flight = true;

        let _ = update(&mut app, Message::ExchangeFinished(success_outcome()));

        assert!(!app.in_flight);
        let rendered = app.rendered.expect("success should render");
        assert_eq!(rendered.tone, Tone::Neutral);
    }

    #[test]
    fn finished_exchange_releases_guard_on_failure() {
        let mut app = App::default();
        app.in_flight = true;

        let _ = update(&mut app, Message::ExchangeFinished(failure_outcome()));

        assert!(!app.in_flight);
        let rendered = app.rendered.expect("failure should render");
        assert_eq!(rendered.tone, Tone::Attention);
    }

    #[test]
    fn invalid_url_renders_inline_without_raising_guard() {
        let mut app = App::default();
        app.url = "not a url".to_string();

        let _ = update(&mut app, Message::SendPressed);

        assert!(!app.in_flight);
        let rendered = app.rendered.expect("build error should render");
        assert_eq!(rendered.tone, Tone::Attention);
    }

    #[test]
    fn editor_body_strips_only_the_synthetic_newline() {
        assert_eq!(editor_body("{\"key\":\"value\"}\n".to_string()), "{\"key\":\"value\"}");
        assert_eq!(editor_body("line one\nline two\n".to_string()), "line one\nline two");
        // Whitespace the user typed survives; only one newline goes.
        assert_eq!(editor_body("trailing space \n".to_string()), "trailing space ");
        assert_eq!(editor_body("blank last line\n\n".to_string()), "blank last line\n");
        assert_eq!(editor_body("\n".to_string()), "");
    }
}
