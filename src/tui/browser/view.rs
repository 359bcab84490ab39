//! レビューブラウザの view（描画）

use super::model::{Focus, Model, ReviewsPanel, SelectorModel};
use crate::api::Review;
use crate::card::{format_review_date, star_rating, NO_REVIEWS_MESSAGE};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// 画面を描画
pub fn draw(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タイトル
            Constraint::Length(9), // アプリセレクタ
            Constraint::Min(1),    // レビューパネル
            Constraint::Length(1), // ステータス/ヘルプ
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_selector(f, chunks[1], model);
    render_reviews(f, chunks[2], model);
    render_status(f, chunks[3], model);
}

/// タイトルバーを描画
fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        " Re:View ",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, area);
}

/// フォーカス状態に応じた枠スタイル
fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// アプリセレクタを描画
fn render_selector(f: &mut Frame, area: Rect, model: &mut Model) {
    let focused = model.focus == Focus::Apps;

    match &mut model.selector {
        SelectorModel::Loading => {
            let content = Paragraph::new("  Loading...")
                .block(
                    Block::default()
                        .title(" Apps ")
                        .borders(Borders::ALL)
                        .border_style(border_style(focused)),
                )
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(content, area);
        }
        SelectorModel::Failed => {
            // 取得失敗時は空のセレクタのまま（エラーはステータス行へ）
            let content = Paragraph::new("").block(
                Block::default()
                    .title(" Apps (0) ")
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            );
            f.render_widget(content, area);
        }
        SelectorModel::Ready { apps, state } => {
            let title = format!(" Apps ({}) ", apps.len());
            let items: Vec<ListItem> = apps
                .iter()
                .map(|app| ListItem::new(format!("  {}", app.name)))
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(border_style(focused)),
                )
                .highlight_style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .fg(Color::Green),
                )
                .highlight_symbol("> ");

            f.render_stateful_widget(list, area, state);
        }
    }
}

/// レビューパネルを描画
fn render_reviews(f: &mut Frame, area: Rect, model: &Model) {
    let focused = model.focus == Focus::Reviews;
    let title = match model.selected_app() {
        Some(app) => format!(" Reviews - {} ", app.name),
        None => " Reviews ".to_string(),
    };

    let paragraph = Paragraph::new(review_panel_lines(&model.panel))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        )
        .wrap(Wrap { trim: false })
        .scroll((model.scroll, 0));

    f.render_widget(paragraph, area);
}

/// ステータス行を描画（エラーがあればヘルプより優先）
fn render_status(f: &mut Frame, area: Rect, model: &Model) {
    let status = match &model.last_error {
        Some(error) => Paragraph::new(format!(" {error}")).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(" Tab: switch pane | ↑↓: move | Enter: re-fetch | q: quit")
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(status, area);
}

/// レビューパネルの本文行を構築する
///
/// `Idle` と空の `Ready` は同じ「レビューなし」表示になる。
pub(super) fn review_panel_lines(panel: &ReviewsPanel) -> Vec<Line<'static>> {
    match panel {
        ReviewsPanel::Loading => vec![Line::from(Span::styled(
            "  Loading...",
            Style::default().fg(Color::DarkGray),
        ))],
        ReviewsPanel::Idle => no_reviews_lines(),
        ReviewsPanel::Ready(reviews) if reviews.is_empty() => no_reviews_lines(),
        ReviewsPanel::Ready(reviews) => reviews.iter().flat_map(card_lines).collect(),
        ReviewsPanel::Failed(message) => vec![Line::from(Span::styled(
            format!("  Error: {message}"),
            Style::default().fg(Color::Red),
        ))],
    }
}

fn no_reviews_lines() -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        format!("  {NO_REVIEWS_MESSAGE}"),
        Style::default().fg(Color::DarkGray),
    ))]
}

/// 1件のレビューカードを行として構築する
pub(super) fn card_lines(review: &Review) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("  {}", review.author),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {}", star_rating(review.score)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  {}", format_review_date(&review.date)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("  {}", review.content)),
        Line::raw(""),
    ]
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
