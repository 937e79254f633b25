mod format;
mod style;

use crate::rank::Question;
use crate::stackexchange::types::{Answer, AnswersResponse};
use format::{format_date, format_number};
use style::{CHECK_ICON, STACK_OVERFLOW_LOGO, element, link_button, outline_badge, style_code_blocks};

/// Fragment rendered when the search matched nothing.
pub fn no_results() -> String {
    element(
        "p",
        "margin: 0; font-size: 1.25em; flex: 1;",
        "No results found. Please try a different search query.",
    )
}

/// Render the ranked questions and their answers into one markup fragment.
///
/// `answers` is positional: `answers[i]` belongs to `questions[i]`. A missing
/// or empty entry renders the no-answers notice for that question.
pub fn results(questions: &[Question], answers: &[AnswersResponse]) -> String {
    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        let items = answers.get(i).map(|a| a.items.as_slice()).unwrap_or(&[]);
        out.push_str(&render_question(question, items));
    }
    out
}

fn render_question(question: &Question, answers: &[Answer]) -> String {
    let title = element(
        "h3",
        "margin: 0; font-size: 1.25em; margin-bottom: 10px;",
        &question.title,
    );

    let mut date_spans = format!(
        r#"<span style="margin-right: 10px; margin-bottom: 5px;">Asked on {}</span>"#,
        format_date(question.created)
    );
    if let Some(edited) = question.last_edited {
        date_spans.push_str(&format!(
            r#"<span style="margin-bottom: 5px;">Last updated on {}</span>"#,
            format_date(edited)
        ));
    }
    let dates = element(
        "div",
        "font-size: 0.875em; color: #888; margin-top: 5px; margin-bottom: 5px;",
        &format!(r#"<div style="display: flex; flex-wrap: wrap;">{date_spans}</div>"#),
    );

    let badges = element(
        "div",
        "display: flex; align-items: center; gap: 5px; font-size: 1em; color: #555; flex-wrap: wrap;",
        &format!(
            "{}{}{}",
            outline_badge("Upvotes", &format_number(question.upvotes)),
            outline_badge("Answers", &format_number(question.answer_count.into())),
            outline_badge("Comments", &format_number(question.comment_count.into())),
        ),
    );

    let view = link_button(
        &question.link,
        "See Question",
        STACK_OVERFLOW_LOGO,
        "margin-top: 10px;",
    );

    element(
        "div",
        "margin-bottom: 20px; padding: 10px; border: 1px solid #ddd; border-radius: 8px; background-color: #ffffff; box-shadow: 0px 1px 3px rgba(0, 0, 0, 0.1);",
        &format!("{title}{dates}{badges}{view}{}", render_answers(answers)),
    )
}

/// Answer block for one question.
fn render_answers(answers: &[Answer]) -> String {
    let inner = if answers.is_empty() {
        element("p", "font-style: italic; color: #888;", "No answers available.")
    } else {
        answers.iter().map(render_answer).collect()
    };
    element("div", "display: block; margin-top: 20px;", &inner)
}

fn render_answer(answer: &Answer) -> String {
    let accepted = if answer.is_accepted {
        element(
            "span",
            "display: flex; align-items: center; gap: 5px; background-color: #e6ffed; color: #28a745; padding: 10px 10px; margin-bottom: 5px; border-radius: 5px; font-weight: bold; font-size: 0.9em;",
            &format!("{CHECK_ICON} Accepted Answer"),
        )
    } else {
        String::new()
    };

    let answered = element(
        "div",
        "font-size: 0.875em; color: #888;",
        &format!(
            r#"<div style="display: flex; flex-wrap: wrap; justify-content: right;"><span>Answered on {}</span></div>"#,
            format_date(answer.creation_date)
        ),
    );

    let body = element(
        "div",
        "padding: 10px; border-radius: 4px;",
        &style_code_blocks(&answer.body),
    );

    let badges = element(
        "div",
        "display: flex; align-items: center; gap: 5px; font-size: 1em; color: #555; flex-wrap: wrap;",
        &format!(
            "{}{}",
            outline_badge("Score", &format_number(answer.score)),
            outline_badge("Reputation", &format_number(answer.owner.reputation)),
        ),
    );

    let actions = element(
        "div",
        "display: flex; margin-top: 10px; margin-bottom: 10px;",
        &link_button(
            &format!("https://stackoverflow.com/a/{}", answer.answer_id),
            "See Answer",
            STACK_OVERFLOW_LOGO,
            "",
        ),
    );

    element(
        "div",
        "padding: 12px; margin-bottom: 16px; border: 1px solid #ddd; border-radius: 8px; background-color: #ffffff; box-shadow: 0px 1px 3px rgba(0, 0, 0, 0.1);",
        &format!("{accepted}{answered}{body}{badges}{actions}"),
    )
}
