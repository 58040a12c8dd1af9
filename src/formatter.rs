//! Widget rendering with localized month labels and color support.

use chrono::{Locale, NaiveDate};
use unicode_width::UnicodeWidthStr;

use crate::decoration::CellDecorations;
use crate::types::{
    CELL_GAP, CELL_WIDTH, COLOR_BOLD, COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW,
    COLOR_TEAL, CalContext, CalendarCell, DAYS_PER_WEEK, MonthRef, SUBTITLE, TITLE,
    WIDGET_WIDTH, WEEKDAYS,
};

const PREV_GLYPH: &str = "‹";
const NEXT_GLYPH: &str = "›";
const TODAY_CONTROL: &str = "[Today]";
const EVENT_MARKER: &str = "•";
const TODAY_LEGEND_MARKER: &str = "●";

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Get month name in nominative case for a locale (0-based month).
pub fn get_month_name(month: u32, locale: Locale) -> String {
    let table: Option<[&str; 12]> = match locale {
        Locale::ru_RU => Some([
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ]),
        Locale::uk_UA => Some([
            "Січень",
            "Лютий",
            "Березень",
            "Квітень",
            "Травень",
            "Червень",
            "Липень",
            "Серпень",
            "Вересень",
            "Жовтень",
            "Листопад",
            "Грудень",
        ]),
        Locale::be_BY => Some([
            "Студзень",
            "Люты",
            "Сакавік",
            "Красавік",
            "Май",
            "Чэрвень",
            "Ліпень",
            "Жнівень",
            "Верасень",
            "Кастрычнік",
            "Лістапад",
            "Снежань",
        ]),
        Locale::pl_PL => Some([
            "Styczeń",
            "Luty",
            "Marzec",
            "Kwiecień",
            "Maj",
            "Czerwiec",
            "Lipiec",
            "Sierpień",
            "Wrzesień",
            "Październik",
            "Listopad",
            "Grudzień",
        ]),
        Locale::cs_CZ => Some([
            "Leden",
            "Únor",
            "Březen",
            "Duben",
            "Květen",
            "Červen",
            "Červenec",
            "Srpen",
            "Září",
            "Říjen",
            "Listopad",
            "Prosinec",
        ]),
        _ => None,
    };

    if let Some(names) = table {
        return names
            .get(month as usize)
            .map(|name| name.to_string())
            .unwrap_or_default();
    }

    NaiveDate::from_ymd_opt(2000, month + 1, 1)
        .map(|date| date.format_localized("%B", locale).to_string())
        .unwrap_or_default()
}

/// Long-form month/year label, e.g. "February 2024".
pub fn format_month_label(month: MonthRef, locale: Locale) -> String {
    format!("{} {}", get_month_name(month.month, locale), month.year)
}

/// Parse month from string (numeric 1-12 or name in English/Russian).
///
/// Returns the 1-based month number as typed on the command line.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 35] = [
        // English full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Russian full names
        ("январь", 1),
        ("февраль", 2),
        ("март", 3),
        ("апрель", 4),
        ("май", 5),
        ("июнь", 6),
        ("июль", 7),
        ("август", 8),
        ("сентябрь", 9),
        ("октябрь", 10),
        ("ноябрь", 11),
        ("декабрь", 12),
        // English short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Center text within a specified width, accounting for Unicode character widths.
pub fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Greedy word wrap on display width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn paint(ctx: &CalContext, style: &str, text: &str) -> String {
    if ctx.color {
        format!("{}{}{}", style, text, COLOR_RESET)
    } else {
        text.to_string()
    }
}

/// Title on the left, the today control on the right.
pub fn format_title_line(ctx: &CalContext) -> String {
    let gap = WIDGET_WIDTH.saturating_sub(TITLE.width() + TODAY_CONTROL.width());
    format!(
        "{}{}{}",
        paint(ctx, COLOR_BOLD, TITLE),
        " ".repeat(gap.max(1)),
        TODAY_CONTROL
    )
}

/// Month label between the previous/next glyphs.
pub fn format_nav_line(ctx: &CalContext, month: MonthRef, locale: Locale) -> String {
    let label = format_month_label(month, locale);
    let inner = WIDGET_WIDTH.saturating_sub(PREV_GLYPH.width() + NEXT_GLYPH.width());
    let centered = center_text(&label, inner);
    format!(
        "{}{}{}",
        PREV_GLYPH,
        paint(ctx, COLOR_TEAL, &centered),
        NEXT_GLYPH
    )
}

/// Weekday header row, Sunday first.
pub fn format_weekday_headers(ctx: &CalContext) -> String {
    let labels: Vec<String> = WEEKDAYS
        .iter()
        .map(|day| center_text(day, CELL_WIDTH))
        .collect();
    paint(ctx, COLOR_SAND_YELLOW, &labels.join(&" ".repeat(CELL_GAP)))
}

/// Format one day cell: day number followed by the event marker column.
///
/// Without color, today is bracketed; with color it is shown in reverse
/// video and days outside the month are dimmed.
pub fn format_cell(ctx: &CalContext, cell: &CalendarCell, decorations: CellDecorations) -> String {
    let (left, right) = if decorations.today && !ctx.color {
        ("[", "]")
    } else {
        (" ", " ")
    };
    let body = format!("{}{:>2}{}", left, cell.date.day, right);

    let body = if decorations.today {
        paint(ctx, COLOR_REVERSE, &body)
    } else if decorations.outside_month {
        paint(ctx, COLOR_DIM, &body)
    } else {
        body
    };

    let marker = if decorations.event {
        paint(ctx, COLOR_TEAL, EVENT_MARKER)
    } else {
        " ".to_string()
    };

    format!("{}{}", body, marker)
}

/// Format the grid as rows of seven cells.
pub fn format_grid_rows(ctx: &CalContext, cells: &[CalendarCell]) -> Vec<String> {
    cells
        .chunks(DAYS_PER_WEEK)
        .map(|week| {
            week.iter()
                .map(|cell| {
                    let decorations = CellDecorations::for_cell(cell, ctx.event_rule.as_ref());
                    format_cell(ctx, cell, decorations)
                })
                .collect::<Vec<_>>()
                .join(&" ".repeat(CELL_GAP))
        })
        .collect()
}

/// Legend and timezone lines.
pub fn format_footer(ctx: &CalContext) -> Vec<String> {
    let mut legend = format!(
        "{} Today",
        paint(ctx, COLOR_SAND_YELLOW, TODAY_LEGEND_MARKER)
    );
    if let Some(label) = ctx.event_rule.legend_label() {
        legend.push_str(&format!(
            "   {} {}",
            paint(ctx, COLOR_TEAL, EVENT_MARKER),
            label
        ));
    }
    let timezone = format!(
        "Times shown in {}",
        paint(ctx, COLOR_BOLD, &ctx.timezone_label)
    );
    vec![legend, timezone]
}

/// Format the whole widget as lines, indented by `ctx.indent`.
pub fn format_widget(ctx: &CalContext, month: MonthRef, cells: &[CalendarCell]) -> Vec<String> {
    let locale = get_system_locale();
    let mut lines = Vec::with_capacity(16);

    lines.push(format_title_line(ctx));
    lines.extend(
        wrap_text(SUBTITLE, WIDGET_WIDTH)
            .iter()
            .map(|line| paint(ctx, COLOR_DIM, line)),
    );
    lines.push(String::new());
    lines.push(format_nav_line(ctx, month, locale));
    lines.push(String::new());
    lines.push(format_weekday_headers(ctx));
    lines.extend(format_grid_rows(ctx, cells));
    lines.push(String::new());
    lines.extend(format_footer(ctx));

    if ctx.indent > 0 {
        let margin = " ".repeat(ctx.indent);
        for line in lines.iter_mut().filter(|line| !line.is_empty()) {
            line.insert_str(0, &margin);
        }
    }

    lines
}

/// Print the widget for one month.
pub fn print_widget(ctx: &CalContext, month: MonthRef, cells: &[CalendarCell]) {
    for line in format_widget(ctx, month, cells) {
        println!("{}", line);
    }
}

/// Left margin that centers the widget in a terminal of `term_width` columns.
pub fn widget_indent(term_width: Option<u32>) -> usize {
    term_width
        .map(|w| (w as usize).saturating_sub(WIDGET_WIDTH) / 2)
        .unwrap_or(0)
}

/// Get terminal width using terminal_size crate.
pub fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
