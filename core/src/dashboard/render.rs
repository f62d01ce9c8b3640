use std::fmt::Write;

use crate::event::{HookEvent, HookKind};
use crate::stats::Statistics;
use crate::util::{char_slice, file_name_of, short_timestamp, truncate_chars};

use super::format::{format_file_size, html_escape, percent};
use super::scan::{FileStatus, SystemSnapshot};
use super::template::{SCRIPT, STYLE, TABS, TITLE};

const RECENT_OPS: usize = 50;
const TOP_SESSIONS: usize = 10;
const TOP_FILES: usize = 15;
const RECENT_COMMANDS: usize = 10;
const TIMELINE_ITEMS: usize = 30;
const TOP_CONVERSATIONS: usize = 10;
const ACTIVITY_DAYS: usize = 14;
const DETAIL_PREVIEW: usize = 60;

/// Everything a render depends on. The renderer reads nothing else, so equal
/// inputs always produce the same document.
pub struct DashboardInput<'a> {
    pub stats: &'a Statistics,
    pub recent: &'a [HookEvent],
    pub snapshot: &'a SystemSnapshot,
    pub generated_at: &'a str,
}

pub fn render(input: &DashboardInput<'_>) -> String {
    let mut html = String::with_capacity(64 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n"
    );

    render_header(&mut html, input);
    render_tabs(&mut html);

    html.push_str("<div id=\"tab-monitor\" class=\"tab-content active\">\n");
    render_monitor(&mut html, input);
    html.push_str("</div>\n<div id=\"tab-evo\" class=\"tab-content\">\n");
    render_evolution(&mut html, input.snapshot);
    html.push_str("</div>\n<div id=\"tab-intel\" class=\"tab-content\">\n");
    render_conversations(&mut html, input.snapshot);
    html.push_str("</div>\n<div id=\"tab-overview\" class=\"tab-content\">\n");
    render_overview(&mut html, input);
    html.push_str("</div>\n");

    let _ = write!(
        html,
        "<div class=\"footer\">Generated: {} · refresh (F5) keeps the current tab</div>\n\
         <script>{SCRIPT}</script>\n</body>\n</html>\n",
        html_escape(input.generated_at)
    );
    html
}

fn render_header(html: &mut String, input: &DashboardInput<'_>) {
    let last_updated = input
        .stats
        .last_updated
        .as_deref()
        .map(|ts| short_timestamp(ts, 19))
        .unwrap_or_else(|| "N/A".to_string());
    let _ = write!(
        html,
        "<div class=\"header\"><h1>🔭 <span>AI</span> Observatory</h1>\
         <div class=\"meta\">Last event: {}<br>Generated: {}</div></div>\n",
        html_escape(&last_updated),
        html_escape(input.generated_at)
    );
}

fn render_tabs(html: &mut String) {
    html.push_str("<div class=\"tabs\">");
    for (i, (id, label)) in TABS.iter().enumerate() {
        let active = if i == 0 { " active" } else { "" };
        let _ = write!(
            html,
            "<button class=\"tab{active}\" data-tab=\"{id}\" onclick=\"switchTab('{id}',this)\">{label}</button>"
        );
    }
    html.push_str("</div>\n");
}

fn stat_card(html: &mut String, color: &str, value: impl std::fmt::Display, label: &str) {
    let _ = write!(
        html,
        "<div class=\"stat-card {color}\"><div class=\"stat-value\">{value}</div>\
         <div class=\"stat-label\">{label}</div></div>"
    );
}

fn bar_row(html: &mut String, label: &str, pct: u32, count: &str, alt: bool) {
    let class = if alt { "bar-fill alt" } else { "bar-fill" };
    let _ = write!(
        html,
        "<div class=\"bar-row\"><span class=\"bar-label\">{label}</span>\
         <div class=\"bar-track\"><div class=\"{class}\" style=\"width:{pct}%\"></div></div>\
         <span class=\"bar-count\">{count}</span></div>\n"
    );
}

fn empty_row(html: &mut String, colspan: usize, text: &str) {
    let _ = writeln!(
        html,
        "<tr><td colspan=\"{colspan}\" class=\"empty\">{text}</td></tr>"
    );
}

fn render_monitor(html: &mut String, input: &DashboardInput<'_>) {
    let stats = input.stats;

    html.push_str("<div class=\"stats-grid\">");
    stat_card(html, "c-blue", stats.total_events, "EVENTS");
    stat_card(html, "c-green", stats.sessions.len(), "SESSIONS");
    stat_card(html, "c-purple", stats.rules_triggered.len(), "RULES TRIGGERED");
    stat_card(html, "c-yellow", stats.files_accessed.len(), "FILES TOUCHED");
    html.push_str("</div>\n<div class=\"panels\">\n");

    // Event distribution
    html.push_str("<div class=\"panel\"><h2>Event distribution</h2>\n");
    let max = stats.events_by_type.values().copied().max().unwrap_or(1);
    for (kind, count) in &stats.events_by_type {
        let label = HookKind::from_name(kind).label();
        bar_row(
            html,
            &html_escape(&label),
            percent(*count as f64, max as f64),
            &count.to_string(),
            false,
        );
    }
    if stats.events_by_type.is_empty() {
        html.push_str("<div class=\"empty\">No events yet</div>\n");
    }
    html.push_str("</div>\n");

    // Rules
    html.push_str("<div class=\"panel\"><h2>Triggered rules</h2><table>\n<tr><th>Rule</th><th>Count</th></tr>\n");
    for (rule, count) in Statistics::ranked(&stats.rules_triggered) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{count}</td></tr>",
            html_escape(rule)
        );
    }
    if stats.rules_triggered.is_empty() {
        empty_row(html, 2, "No rule triggers yet (collected from AI responses)");
    }
    html.push_str("</table></div>\n");

    // Recent operations
    html.push_str("<div class=\"panel full-width\"><h2>Recent operations</h2><div class=\"ops-container\">\n");
    let start = input.recent.len().saturating_sub(RECENT_OPS);
    for ev in input.recent[start..].iter().rev() {
        let ts = ev.display_timestamp().map(|t| char_slice(t, 11, 19)).unwrap_or("");
        let detail = html_escape(&operation_detail(ev));
        let _ = writeln!(
            html,
            "<div class=\"op-row\"><span class=\"op-time\">{}</span><span class=\"op-icon\">{}</span>\
             <span class=\"op-action\">{}</span><span class=\"op-detail\" title=\"{detail}\">{detail}</span></div>",
            html_escape(ts),
            HookKind::icon(&ev.kind),
            html_escape(&ev.kind),
        );
    }
    if input.recent.is_empty() {
        html.push_str("<div class=\"op-row\"><span class=\"empty\">No operations recorded</span></div>\n");
    }
    html.push_str("</div></div>\n");

    // Sessions
    html.push_str(
        "<div class=\"panel\"><h2>Sessions</h2><table>\n\
         <tr><th>Session</th><th>Events</th><th>First seen</th><th>Last seen</th></tr>\n",
    );
    for (id, s) in stats.sessions_by_recency().into_iter().take(TOP_SESSIONS) {
        let _ = writeln!(
            html,
            "<tr><td><code>{}</code></td><td class=\"num\">{}</td><td>{}</td><td>{}</td></tr>",
            html_escape(truncate_chars(id, 8)),
            s.event_count,
            html_escape(&short_timestamp(&s.first_seen, 16)),
            html_escape(&short_timestamp(&s.last_seen, 16)),
        );
    }
    if stats.sessions.is_empty() {
        empty_row(html, 4, "No sessions recorded");
    }
    html.push_str("</table></div>\n");

    // Files
    html.push_str("<div class=\"panel\"><h2>Most accessed files</h2><table>\n<tr><th>File</th><th>Count</th></tr>\n");
    for (name, count) in Statistics::ranked(&stats.files_accessed).into_iter().take(TOP_FILES) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td class=\"num\">{count}</td></tr>",
            html_escape(name)
        );
    }
    if stats.files_accessed.is_empty() {
        empty_row(html, 2, "No file access recorded");
    }
    html.push_str("</table></div>\n");

    // Commands
    html.push_str(
        "<div class=\"panel full-width\"><h2>Recent commands</h2><table>\n\
         <tr><th>Time</th><th>Command</th><th>Directory</th></tr>\n",
    );
    for c in stats.commands_executed.iter().rev().take(RECENT_COMMANDS) {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td><code>{}</code></td><td>{}</td></tr>",
            html_escape(&short_timestamp(&c.time, 19)),
            html_escape(&c.cmd),
            html_escape(&c.cwd),
        );
    }
    if stats.commands_executed.is_empty() {
        empty_row(html, 3, "No commands recorded");
    }
    html.push_str("</table></div>\n</div>\n");
}

/// One-line summary of what an event touched.
fn operation_detail(ev: &HookEvent) -> String {
    if let Some(path) = ev.payload_str("file_path") {
        file_name_of(path).to_string()
    } else if let Some(cmd) = ev.payload_str("command_line") {
        truncate_chars(cmd, DETAIL_PREVIEW).to_string()
    } else if let Some(tool) = ev.payload_str("mcp_tool_name") {
        format!("{}/{}", ev.payload_str("mcp_server_name").unwrap_or(""), tool)
    } else if let Some(prompt) = ev.payload_str("user_prompt") {
        truncate_chars(prompt, DETAIL_PREVIEW).to_string()
    } else if let Some(resp) = ev.payload_str("response") {
        format!("{} chars", resp.chars().count())
    } else {
        String::new()
    }
}

fn render_evolution(html: &mut String, snap: &SystemSnapshot) {
    html.push_str("<div class=\"stats-grid\">");
    stat_card(html, "c-blue", snap.total_files, "TRACKED FILES");
    stat_card(html, "c-green", snap.new_count, "NEW (24H)");
    stat_card(html, "c-yellow", snap.modified_count, "MODIFIED (7D)");
    stat_card(html, "c-purple", snap.categories.len(), "CATEGORIES");
    html.push_str("</div>\n<div class=\"panels\">\n<div class=\"panel\"><h2>Architecture</h2>\n");

    for cat in &snap.categories {
        let new_in_cat = cat.files.iter().filter(|f| f.status == FileStatus::New).count();
        let mod_in_cat = cat
            .files
            .iter()
            .filter(|f| f.status == FileStatus::Modified)
            .count();
        let mut badges = String::new();
        if new_in_cat > 0 {
            let _ = write!(badges, " <span class=\"badge-new\">+{new_in_cat} new</span>");
        }
        if mod_in_cat > 0 {
            let _ = write!(badges, " <span class=\"badge-mod\">{mod_in_cat} changed</span>");
        }
        let _ = write!(
            html,
            "<div class=\"tree-cat\"><div class=\"tree-hdr\" onclick=\"toggleTree(this)\">\
             <span class=\"tree-arrow\">&#9654;</span> {} <strong>{}</strong>\
             <span class=\"tree-cnt\">({} files)</span>{badges}</div>\
             <div class=\"tree-body\" style=\"display:none\">",
            html_escape(&cat.icon),
            html_escape(&cat.name),
            cat.files.len(),
        );
        for f in &cat.files {
            let badge = match f.status {
                FileStatus::New => " <span class=\"badge-new\">new</span>",
                FileStatus::Modified => " <span class=\"badge-mod\">recent</span>",
                FileStatus::Stable => "",
            };
            let _ = write!(
                html,
                "<div class=\"tree-file {}\" title=\"{}\"><span class=\"tf-name\">{}{badge}</span>\
                 <span class=\"tf-size\">{}</span><span class=\"tf-time\">{}</span></div>",
                f.status.as_str(),
                html_escape(&f.rel),
                html_escape(&f.name),
                format_file_size(f.size),
                f.mtime_str(),
            );
        }
        html.push_str("</div></div>\n");
    }
    if snap.categories.is_empty() {
        html.push_str("<div class=\"empty\">No scanned directories found</div>\n");
    }
    html.push_str("</div>\n<div class=\"panel\"><h2>Change timeline</h2><div class=\"ops-container\">\n");

    for ch in snap.recent_changes.iter().take(TIMELINE_ITEMS) {
        let badge = match ch.file.status {
            FileStatus::New => "<span class=\"badge-new\">added</span>",
            FileStatus::Modified => "<span class=\"badge-mod\">changed</span>",
            FileStatus::Stable => "",
        };
        let _ = writeln!(
            html,
            "<div class=\"tl-item {}\"><span class=\"tl-time\">{}</span>{badge}\
             <span class=\"tl-icon\">{}</span><span class=\"tl-name\">{}</span>\
             <span class=\"tl-cat\">{}</span></div>",
            ch.file.status.as_str(),
            ch.file.mtime_str(),
            html_escape(&ch.icon),
            html_escape(&ch.file.name),
            html_escape(&ch.category),
        );
    }
    if snap.recent_changes.is_empty() {
        html.push_str("<div class=\"empty\">No file changes recorded</div>\n");
    }
    html.push_str("</div></div>\n</div>\n");
}

fn render_conversations(html: &mut String, snap: &SystemSnapshot) {
    let conv = &snap.conversations;

    html.push_str("<div class=\"stats-grid\">");
    stat_card(html, "c-blue", snap.conversation_count, "CONVERSATIONS");
    stat_card(html, "c-purple", format!("{:.1}", conv.total_size_mb), "TOTAL MB");
    stat_card(html, "c-yellow", snap.implicit_count, "IMPLICIT CONTEXT");
    stat_card(html, "c-green", conv.active.len(), "ACTIVE NOW");
    html.push_str("</div>\n");

    if let (Some(oldest), Some(newest)) = (conv.oldest, conv.newest) {
        let days = (newest - oldest).num_days();
        let _ = writeln!(
            html,
            "<div class=\"panel full-width\" style=\"margin-bottom:16px\">Span: {} ~ {} ({days} days)</div>",
            oldest.format("%Y-%m-%d"),
            newest.format("%Y-%m-%d"),
        );
    }

    html.push_str("<div class=\"panels\">\n<div class=\"panel full-width\"><h2>Active conversations</h2>\n");
    for a in &conv.active {
        let _ = writeln!(
            html,
            "<div class=\"op-row\"><span class=\"op-icon\">🟢</span><span class=\"op-action\">{}…</span>\
             <span class=\"op-detail\">{:.1}MB</span><span class=\"op-time\">{}</span></div>",
            html_escape(&a.id),
            a.size_mb,
            a.last,
        );
    }
    if conv.active.is_empty() {
        html.push_str("<div class=\"op-row\"><span class=\"empty\">No active conversations</span></div>\n");
    }
    html.push_str("</div>\n<div class=\"panel\"><h2>Largest conversations</h2>\n");

    let top = &conv.size_dist[..conv.size_dist.len().min(TOP_CONVERSATIONS)];
    let max_size = top.iter().map(|c| c.size_mb).fold(0.0_f64, f64::max);
    let max_size = if max_size > 0.0 { max_size } else { 1.0 };
    for c in top {
        let tag = if c.active {
            " <span class=\"active-dot\">● active</span>"
        } else {
            ""
        };
        let label = format!("{}… ({}){tag}", html_escape(&c.name), c.date);
        bar_row(
            html,
            &label,
            percent(c.size_mb, max_size),
            &format!("{:.1}MB", c.size_mb),
            false,
        );
    }
    if top.is_empty() {
        html.push_str("<div class=\"empty\">No conversations found</div>\n");
    }
    html.push_str("</div>\n<div class=\"panel\"><h2>Activity by day</h2>\n");

    let max_day = conv.by_day.values().copied().max().unwrap_or(1).max(1);
    let skip = conv.by_day.len().saturating_sub(ACTIVITY_DAYS);
    for (day, count) in conv.by_day.iter().skip(skip) {
        bar_row(
            html,
            day,
            percent(*count as f64, max_day as f64),
            &count.to_string(),
            true,
        );
    }
    if conv.by_day.is_empty() {
        html.push_str("<div class=\"empty\">No activity recorded</div>\n");
    }
    html.push_str("</div>\n</div>\n");
}

fn render_overview(html: &mut String, input: &DashboardInput<'_>) {
    let snap = input.snapshot;
    let cards: [(&str, usize, &str); 6] = [
        ("🧠", snap.skills_count, "Skills"),
        ("🔌", snap.mcp_count, "MCP servers"),
        ("🔄", snap.workflows_count, "Workflows"),
        ("💾", snap.memory_count, "Memories"),
        ("💬", snap.conversation_count, "Conversations"),
        ("🪝", input.stats.events_by_type.len(), "Hook kinds seen"),
    ];
    html.push_str("<div class=\"panels\"><div class=\"panel full-width\"><h2>Capabilities</h2><div class=\"cap-grid\">\n");
    for (icon, n, label) in cards {
        let _ = writeln!(
            html,
            "<div class=\"cap-card\"><div class=\"cap-icon\">{icon}</div>\
             <div class=\"cap-num\">{n}</div><div class=\"cap-label\">{label}</div></div>"
        );
    }
    html.push_str("</div></div></div>\n");
}
