//! Hard-coded sample records. There is no backing store for entities;
//! every screen seeds its own working copies from these.

use crate::model::records::{Category, Group, Post, TokenRecord, User};
use crate::model::task::{AutomationTask, LogEntry, LogKind, TaskStatus};

// ── publish wizard ──────────────────────────────────────────────────

pub fn publish_groups() -> Vec<Group> {
    vec![
        Group::new("1", "12345", "Группа 1", "Маркетинг"),
        Group::new("2", "67890", "Группа 2", "IT"),
        Group::new("3", "11111", "Группа 3", "Маркетинг"),
    ]
}

pub fn publish_posts() -> Vec<Post> {
    vec![
        Post::new("1", "Промо", "Отличное предложение для вас!", true),
        Post::new("2", "Новости", "Важная новость дня", false),
        Post::new("3", "Промо", "Специальная акция только сегодня", true),
    ]
}

pub fn publish_categories() -> Vec<String> {
    vec![
        "Маркетинг".into(),
        "IT".into(),
        "Промо".into(),
        "Новости".into(),
    ]
}

// ── repost wizard ───────────────────────────────────────────────────

pub fn donor_groups() -> Vec<Group> {
    vec![
        Group::new("1", "33333", "Новости дня", "Новости"),
        Group::new("2", "44444", "Бизнес идеи", "Маркетинг"),
        Group::new("3", "55555", "Технологии", "IT"),
    ]
}

pub fn target_groups() -> Vec<Group> {
    publish_groups()
}

// ── liking wizard ───────────────────────────────────────────────────

pub fn liking_groups() -> Vec<Group> {
    vec![
        Group::new("1", "12345", "Группа 1", "Маркетинг"),
        Group::new("2", "67890", "Группа 2", "IT"),
    ]
}

pub fn liking_users() -> Vec<User> {
    vec![
        User::new("1", "111111", "Иван", "Иванов"),
        User::new("2", "222222", "Петр", "Петров"),
    ]
}

pub fn liking_categories() -> Vec<String> {
    vec!["Маркетинг".into(), "IT".into()]
}

// ── data entry form ─────────────────────────────────────────────────

pub fn entry_categories() -> Vec<String> {
    publish_categories()
}

// ── records screen ──────────────────────────────────────────────────

pub fn group_records() -> Vec<Group> {
    vec![
        Group::new("1", "12345", "Группа 1", "Маркетинг").with_members(5000),
        Group::new("2", "67890", "Группа 2", "IT").with_members(3000),
    ]
}

pub fn post_records() -> Vec<Post> {
    vec![
        Post::new("1", "Промо", "Отличное предложение для вас!", true),
        Post::new("2", "Новости", "Важная новость дня", false),
    ]
}

pub fn category_records() -> Vec<Category> {
    vec![
        Category::new("1", "Маркетинг"),
        Category::new("2", "IT"),
        Category::new("3", "Промо"),
        Category::new("4", "Новости"),
    ]
}

pub fn token_records() -> Vec<TokenRecord> {
    vec![TokenRecord::new("1", "vk1.a.***************", "2025-10-20 14:30")]
}

// ── task monitor ────────────────────────────────────────────────────

pub fn monitor_tasks() -> Vec<AutomationTask> {
    vec![
        AutomationTask::new(1, "Публикация постов", TaskStatus::Running, "14:30", 65),
        AutomationTask::new(2, "Репосты", TaskStatus::Completed, "13:15", 100),
        AutomationTask::new(3, "Массовый лайкинг", TaskStatus::Pending, "16:00", 0),
        AutomationTask::new(4, "Публикация постов", TaskStatus::Error, "12:00", 45),
    ]
}

/// The detail popup shows this same log for every task.
pub fn execution_log() -> Vec<LogEntry> {
    vec![
        LogEntry::new(
            "14:30:15",
            LogKind::Success,
            "Опубликован пост в группу \"Группа 1\"",
        ),
        LogEntry::new("14:31:20", LogKind::Pause, "Пауза 45 секунд"),
        LogEntry::new(
            "14:32:05",
            LogKind::Success,
            "Опубликован пост в группу \"Группа 2\"",
        ),
        LogEntry::new("14:33:10", LogKind::Pause, "Пауза 52 секунды"),
        LogEntry::new("14:34:02", LogKind::Error, "Ошибка: токен недействителен"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_seed_shapes() {
        assert_eq!(publish_groups().len(), 3);
        assert_eq!(publish_posts().len(), 3);
        assert_eq!(publish_categories().len(), 4);
    }

    #[test]
    fn liking_users_have_no_category() {
        use crate::model::selection::Candidate;
        for user in liking_users() {
            assert_eq!(user.category(), None);
        }
    }

    #[test]
    fn monitor_covers_every_status() {
        let statuses: Vec<TaskStatus> = monitor_tasks().iter().map(|t| t.status).collect();
        assert!(statuses.contains(&TaskStatus::Pending));
        assert!(statuses.contains(&TaskStatus::Running));
        assert!(statuses.contains(&TaskStatus::Completed));
        assert!(statuses.contains(&TaskStatus::Error));
    }

    #[test]
    fn record_ids_are_unique_per_table() {
        let groups = group_records();
        let mut ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), groups.len());
    }
}
