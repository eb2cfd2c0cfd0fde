use crate::grid::GRID_COLUMNS;
use crate::models::{CardState, CardView};

pub fn render_loading() -> String {
    PAGE_HTML
        .replace("{{HEAD_EXTRA}}", r#"<meta http-equiv="refresh" content="1" />"#)
        .replace("{{CONTENT}}", r#"<div class="loading">Loading...</div>"#)
}

pub fn render_card(view: &CardView) -> String {
    let content = match (view.state, view.habit.as_deref()) {
        (CardState::Tracking, Some(habit)) => render_tracking(view, habit),
        _ => CREATE_HTML.replace("{{ACTION}}", &format!("/s/{}/habit", view.session_id)),
    };

    PAGE_HTML
        .replace("{{HEAD_EXTRA}}", "")
        .replace("{{CONTENT}}", &content)
}

fn render_tracking(view: &CardView, habit: &str) -> String {
    let today = view
        .grid
        .last()
        .map(|cell| cell.date.to_string())
        .unwrap_or_default();

    TRACKING_HTML
        .replace("{{ACTION}}", &format!("/s/{}/log", view.session_id))
        .replace("{{TODAY}}", &today)
        .replace("{{STREAK}}", &view.weekly_streak.to_string())
        .replace("{{COLUMNS}}", &GRID_COLUMNS.to_string())
        .replace("{{GRID}}", &render_grid(view))
        // Last, so a habit name containing a placeholder is left alone.
        .replace("{{HABIT}}", &escape_html(habit))
}

fn render_grid(view: &CardView) -> String {
    let mut out = String::with_capacity(view.grid.len() * 48);
    for cell in &view.grid {
        let class = if cell.present { "cell on" } else { "cell" };
        out.push_str(&format!(
            r#"<div class="{class}" title="{date}"></div>"#,
            date = cell.date
        ));
    }
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const CREATE_HTML: &str = r#"<section class="card">
    <header>
      <h1>Create New Habit</h1>
      <p class="subtitle">Name your new habit to start tracking</p>
    </header>
    <form class="stack" method="post" action="{{ACTION}}">
      <input type="text" name="name" placeholder="Enter habit name" required />
      <button type="submit" class="primary wide">Create Habit</button>
    </form>
  </section>"#;

const TRACKING_HTML: &str = r#"<section class="card">
    <header>
      <h1>{{HABIT}}</h1>
      <p class="subtitle">Weekly Streak: <span id="streak">{{STREAK}}</span> weeks</p>
    </header>
    <form class="row" method="post" action="{{ACTION}}">
      <input type="date" name="date" value="{{TODAY}}" required />
      <button type="submit" class="primary">Log Entry</button>
    </form>
    <div class="grid" style="grid-template-columns: repeat({{COLUMNS}}, 16px);">{{GRID}}</div>
  </section>"#;

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{HEAD_EXTRA}}
  <title>Habit Tracker</title>
  <style>
    :root {
      --bg: #030712;
      --card: #111827;
      --field: #1f2937;
      --border: #374151;
      --muted: #9ca3af;
      --ink: #f9fafb;
      --accent: #16a34a;
      --accent-hover: #15803d;
      --on: #22c55e;
      --off: #374151;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    }

    main {
      width: min(672px, 100%);
      margin: 0 auto;
      padding: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 12px;
      padding: 24px;
      display: grid;
      gap: 16px;
    }

    header {
      display: grid;
      gap: 6px;
    }

    h1 {
      margin: 0;
      font-size: 1.5rem;
      font-weight: 600;
      overflow-wrap: anywhere;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .stack {
      display: grid;
      gap: 16px;
    }

    .row {
      display: flex;
      gap: 8px;
    }

    input {
      flex: 1;
      background: var(--field);
      border: 1px solid var(--border);
      border-radius: 6px;
      color: var(--ink);
      padding: 8px 12px;
      font-size: 0.95rem;
      color-scheme: dark;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 6px;
      padding: 8px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    button.primary {
      background: var(--accent);
    }

    button.primary:hover {
      background: var(--accent-hover);
    }

    button.wide {
      width: 100%;
    }

    .grid {
      display: grid;
      gap: 4px;
      margin-top: 16px;
    }

    .cell {
      width: 16px;
      height: 16px;
      border-radius: 2px;
      background: var(--off);
    }

    .cell.on {
      background: var(--on);
    }

    .loading {
      padding: 24px;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main>
  {{CONTENT}}
  </main>
</body>
</html>
"#;
