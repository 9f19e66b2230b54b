use std::collections::HashMap;

use axum::extract::Form;
use axum::response::Html;
use tracing::info;

use service::story::STORY;

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    ))
}

/// Form page listing one text input per story prompt.
pub async fn home() -> Html<String> {
    let inputs = STORY
        .prompts()
        .iter()
        .map(|prompt| {
            format!("<label>{prompt}: <input type=\"text\" name=\"{prompt}\"></label><br>\n")
        })
        .collect::<String>();
    let body = format!(
        "<h1>Madlibs!</h1>\n<form method=\"post\" action=\"/story\">\n{inputs}<button type=\"submit\">Build my story</button>\n</form>"
    );
    page("Madlibs", &body)
}

/// Substitute the submitted answers into the story template.
pub async fn show_story(Form(answers): Form<HashMap<String, String>>) -> Html<String> {
    let text = STORY.generate(&answers);
    info!(answers = answers.len(), "generated story");
    let body = format!("<h1>Your story</h1>\n<p>{}</p>\n<a href=\"/home\">Play again</a>", escape_html(&text));
    page("Your story", &body)
}
