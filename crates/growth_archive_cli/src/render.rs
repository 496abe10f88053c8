//! Plain-text rendering of screen models.
//!
//! One screen becomes a block of lines: header, body, then the bottom
//! navigation when the screen has one. Active tabs and nav entries are
//! wrapped in brackets.

use growth_archive_core::screen::{
    Action, AddCommentScreen, Header, HomeScreen, NavEntry, ParentMessagesScreen,
    RecordDetailScreen, SectionBody, SectionListScreen, SectionScreen, TeacherMessageDetailScreen,
    TeacherMessagesScreen,
};
use growth_archive_core::view::card::NO_CONTENT_MESSAGE;
use growth_archive_core::view::structure::NO_DATA_MESSAGE;
use growth_archive_core::view::timeline::NO_TIMELINE_MESSAGE;
use growth_archive_core::{CardView, Screen, StructureView, TimelineView};

const INDENT: &str = "  ";

/// Renders `screen` as terminal text.
pub fn render(screen: &Screen) -> String {
    let mut out = Vec::new();
    match screen {
        Screen::Home(home) => render_home(&mut out, home),
        Screen::Sections(list) => render_section_list(&mut out, list),
        Screen::Section(section) => render_section(&mut out, section),
        Screen::Record(record) => render_record(&mut out, record),
        Screen::TeacherMessages(list) => render_teacher_messages(&mut out, list),
        Screen::TeacherMessage(message) => render_teacher_message(&mut out, message),
        Screen::ParentMessages(list) => render_parent_messages(&mut out, list),
        Screen::AddComment(form) => render_add_comment(&mut out, form),
    }
    out.join("\n")
}

fn render_header(out: &mut Vec<String>, header: &Header) {
    out.push(format!("== {} ==", header.title));
    if let Some(subtitle) = &header.subtitle {
        out.push(subtitle.clone());
    }
    if let Some(back) = &header.back_path {
        out.push(format!("< {back}"));
    }
    out.push(String::new());
}

fn render_nav(out: &mut Vec<String>, nav: &[NavEntry]) {
    let entries: Vec<String> = nav
        .iter()
        .map(|entry| bracket_if(&entry.label, entry.active))
        .collect();
    out.push(String::new());
    out.push(entries.join("  "));
}

fn render_actions(out: &mut Vec<String>, actions: &[Action]) {
    let rendered: Vec<String> = actions
        .iter()
        .map(|action| match &action.path {
            Some(path) => format!("[{} -> {path}]", action.label),
            None => format!("[{}]", action.label),
        })
        .collect();
    out.push(String::new());
    out.push(rendered.join(" "));
}

fn render_tags(out: &mut Vec<String>, indent: &str, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    let tags: Vec<String> = tags.iter().map(|tag| format!("#{tag}")).collect();
    out.push(format!("{indent}{}", tags.join(" ")));
}

fn bracket_if(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn render_home(out: &mut Vec<String>, home: &HomeScreen) {
    out.push(format!("{} · {}", home.title, home.tagline));
    out.push(format!(
        "{} | {} | {}",
        home.user_name, home.class_name, home.semester_label
    ));
    for row in &home.class_info {
        out.push(format!("{}: {}", row.label, row.value));
    }
    out.push(String::new());
    for tile in &home.tiles {
        out.push(format!(
            "- {} ({}) {} {} -> {}",
            tile.title, tile.subtitle, tile.stat, tile.stat_label, tile.path
        ));
    }
    out.push(String::new());
    out.push(format!(
        "学期进度 第{}周/{}周 {}%",
        home.progress.current_week, home.progress.total_weeks, home.progress.percent
    ));
    render_nav(out, &home.nav);
}

fn render_section_list(out: &mut Vec<String>, list: &SectionListScreen) {
    render_header(out, &list.header);
    for section in &list.sections {
        out.push(format!(
            "- {} ({} 类 / {} 条) -> {}",
            section.name, section.category_count, section.item_count, section.path
        ));
    }
    render_nav(out, &list.nav);
}

fn render_section(out: &mut Vec<String>, section: &SectionScreen) {
    render_header(out, &section.header);
    let tabs: Vec<String> = section
        .tabs
        .iter()
        .map(|entry| bracket_if(&entry.label, entry.active))
        .collect();
    out.push(tabs.join("  "));
    out.push(String::new());

    match &section.body {
        SectionBody::Structure(view) => render_structure(out, view),
        SectionBody::Card(view) => render_cards(out, view),
        SectionBody::Timeline(view) => render_timeline(out, view),
    }
    render_nav(out, &section.nav);
}

fn render_structure(out: &mut Vec<String>, view: &StructureView) {
    let StructureView::Groups(groups) = view else {
        out.push(NO_DATA_MESSAGE.to_string());
        return;
    };
    for group in groups {
        let marker = if group.expanded { "v" } else { ">" };
        out.push(format!(
            "{marker} [{}] {} ({})",
            group.badge, group.name, group.item_count
        ));
        if !group.expanded {
            continue;
        }
        for record in &group.records {
            out.push(format!("{INDENT}- {} -> {}", record.title, record.path));
        }
        for subgroup in &group.subgroups {
            out.push(format!("{INDENT}* {}", subgroup.name));
            for record in &subgroup.records {
                out.push(format!("{INDENT}{INDENT}- {} -> {}", record.title, record.path));
            }
        }
    }
}

fn render_cards(out: &mut Vec<String>, view: &CardView) {
    let CardView::Groups(groups) = view else {
        out.push(NO_CONTENT_MESSAGE.to_string());
        return;
    };
    for group in groups {
        out.push(format!("## {} ({})", group.title, group.item_count));
        for card in &group.cards {
            let mut line = format!("- {} ({}) {}", card.title, card.kind_label, card.date);
            if let Some(score) = &card.score_label {
                line.push_str(&format!(" [{score}]"));
            }
            out.push(line);
            if let Some(summary) = &card.summary {
                out.push(format!("{INDENT}{summary}"));
            }
            render_tags(out, INDENT, &card.tags);
        }
    }
}

fn render_timeline(out: &mut Vec<String>, view: &TimelineView) {
    let TimelineView::Months(months) = view else {
        out.push(NO_TIMELINE_MESSAGE.to_string());
        return;
    };
    for month in months {
        out.push(format!("## {}", month.label));
        for entry in &month.entries {
            let marker = if entry.highlighted { "*" } else { "o" };
            out.push(format!("{marker} {} {}", entry.day_label, entry.title));
            if let Some(summary) = &entry.summary_line {
                out.push(format!("{INDENT}{summary}"));
            }
        }
    }
}

fn render_record(out: &mut Vec<String>, record: &RecordDetailScreen) {
    render_header(out, &record.header);
    for row in &record.meta {
        out.push(format!("{}: {}", row.label, row.value));
    }

    out.push(String::new());
    out.push(format!("[{}]", record.content_title));
    if let Some(summary) = &record.summary {
        out.push(summary.clone());
    }
    render_tags(out, "", &record.tags);

    if !record.photos.is_empty() {
        out.push(String::new());
        out.push(format!("[{}]", record.photos_title));
        out.extend(record.photos.iter().cloned());
    }

    out.push(String::new());
    out.push(format!("[{}]", record.comments_title));
    for comment in &record.comments {
        out.push(format!(
            "- {} {} ({})",
            comment.author, comment.posted_at, comment.status_label
        ));
        out.push(format!("{INDENT}{}", comment.content));
    }
    render_actions(out, &record.actions);
}

fn render_teacher_messages(out: &mut Vec<String>, list: &TeacherMessagesScreen) {
    render_header(out, &list.header);
    for message in &list.messages {
        let author = message.author.as_deref().unwrap_or_default();
        out.push(format!("- {} {} {} -> {}", message.title, author, message.date, message.path));
        if let Some(summary) = &message.summary {
            out.push(format!("{INDENT}{summary}"));
        }
        render_tags(out, INDENT, &message.tags);
    }
    render_nav(out, &list.nav);
}

fn render_teacher_message(out: &mut Vec<String>, message: &TeacherMessageDetailScreen) {
    render_header(out, &message.header);
    if let Some(author) = &message.author {
        out.push(author.clone());
    }
    if let Some(date) = &message.feedback_date {
        out.push(date.clone());
    }
    if let Some(content) = &message.content {
        out.push(String::new());
        out.push(content.clone());
    }
    render_tags(out, "", &message.tags);
}

fn render_parent_messages(out: &mut Vec<String>, list: &ParentMessagesScreen) {
    render_header(out, &list.header);
    for message in &list.messages {
        out.push(format!("- {} {}", message.title, message.date));
        if let Some(summary) = &message.summary {
            out.push(format!("{INDENT}{summary}"));
        }
        if let Some(image) = &message.image {
            out.push(format!("{INDENT}{image}"));
        }
        render_tags(out, INDENT, &message.tags);
    }
    render_actions(out, std::slice::from_ref(&list.compose));
    render_nav(out, &list.nav);
}

fn render_add_comment(out: &mut Vec<String>, form: &AddCommentScreen) {
    render_header(out, &form.header);
    for row in &form.linked {
        out.push(format!("{}: {}", row.label, row.value));
    }

    out.push(String::new());
    out.push(format!("[{}]", form.input_title));
    if form.text.is_empty() {
        out.push(form.placeholder.clone());
    } else {
        out.push(form.text.clone());
    }
    out.push(form.counter.clone());

    out.push(String::new());
    out.push(format!("[{}]", form.photos_title));
    out.extend(form.photos.iter().cloned());
    out.push(String::new());
    out.push(format!("[{}]", form.submit_label));
}

#[cfg(test)]
mod tests {
    use super::render;
    use growth_archive_core::{
        ArchiveService, Catalog, Category, SeedData, ViewTab, ViewerConfig,
    };

    fn builtin() -> ArchiveService<&'static Catalog> {
        ArchiveService::new(Catalog::builtin(), ViewerConfig::default())
    }

    #[test]
    fn home_lists_tiles_and_marks_home_active() {
        let text = render(&builtin().screen());
        assert!(text.starts_with("成长档案 · 记录每一步成长"));
        assert!(text.contains("- 成长记录 (语言·社交·创作·活动) 14 本学期记录 -> /section/growth-records"));
        assert!(text.contains("学期进度 第14周/20周 70%"));
        assert!(text.contains("班主任: 李老师"));
        assert!(text.ends_with("[首页]  老师寄语  家长留言"));
    }

    #[test]
    fn structure_lists_records_only_under_expanded_group() {
        let mut service = builtin();
        service.open("/section/growth-records");
        let text = render(&service.toggle_category("language-expression"));

        assert!(text.contains("[结构视图]  卡片视图  时间线"));
        assert!(text.contains("v [语言] 语言表达 (3)"));
        assert!(text.contains("  - 故事讲述活动 -> /record/lang-1"));
        assert!(text.contains("> [社交] 社交能力 (2)"));
        assert!(!text.contains("/record/social-1"));
    }

    #[test]
    fn cards_show_kind_label_and_score() {
        let mut service = builtin();
        service.open("/section/transition-course");
        let text = render(&service.select_tab(ViewTab::Card));

        assert!(text.contains("## 数学基础 (3)"));
        assert!(text.contains("- 数量认知练习 (活动) 11-22 [掌握良好]"));
    }

    #[test]
    fn timeline_marks_assessments() {
        let mut service = builtin();
        service.open("/section/transition-course");
        let text = render(&service.select_tab(ViewTab::Timeline));

        assert!(text.contains("## 十一月"));
        assert!(text.contains("* 11-25 11月幼小衔接评估"));
        assert!(text.contains("o 11-22 数量认知练习"));
    }

    #[test]
    fn empty_section_shows_empty_state_per_tab() {
        let mut seed = SeedData::builtin();
        seed.sections[2].categories = vec![Category::with_items("empty", "空", "x", Vec::new())];
        let config = ViewerConfig::default();
        let catalog = Catalog::from_seed(seed, &config).expect("catalog builds");
        let mut service = ArchiveService::new(catalog, config);

        let structure = render(&service.open("/section/transition-course"));
        assert!(structure.contains("暂无数据"));
        let cards = render(&service.select_tab(ViewTab::Card));
        assert!(cards.contains("暂无内容"));
        let timeline = render(&service.select_tab(ViewTab::Timeline));
        assert!(timeline.contains("暂无时间线数据"));
    }

    #[test]
    fn add_comment_shows_placeholder_until_text_is_set() {
        let mut service = builtin();
        let empty = render(&service.open("/add-comment"));
        assert!(empty.contains("0/500"));
        assert!(empty.contains("关联科目: 数学"));

        let filled = render(&service.set_comment_text("很棒"));
        assert!(filled.contains("很棒\n2/500"));
    }
}
