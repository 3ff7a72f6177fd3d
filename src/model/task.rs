/// Lifecycle state of an automation task on the monitor screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Error,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Running => "running",
            TaskStatus::Completed => "completed",
            TaskStatus::Error => "error",
        }
    }
}

/// One row on the task monitor.
#[derive(Debug, Clone)]
pub struct AutomationTask {
    pub id: u32,
    pub kind: String,
    pub status: TaskStatus,
    pub started_at: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
}

impl AutomationTask {
    pub fn new(id: u32, kind: &str, status: TaskStatus, started_at: &str, progress: u8) -> Self {
        AutomationTask {
            id,
            kind: kind.to_string(),
            status,
            started_at: started_at.to_string(),
            progress,
        }
    }

    /// Move a pending task to running. Returns whether anything changed.
    pub fn start(&mut self) -> bool {
        if self.status == TaskStatus::Pending {
            self.status = TaskStatus::Running;
            true
        } else {
            false
        }
    }

    /// Move a running task back to pending. Returns whether anything changed.
    pub fn stop(&mut self) -> bool {
        if self.status == TaskStatus::Running {
            self.status = TaskStatus::Pending;
            true
        } else {
            false
        }
    }
}

/// Severity of an execution log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Success,
    Pause,
    Error,
}

/// One line of a task's execution log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(time: &str, kind: LogKind, message: &str) -> Self {
        LogEntry {
            time: time.to_string(),
            kind,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_only_moves_pending_tasks() {
        let mut task = AutomationTask::new(1, "Публикация постов", TaskStatus::Pending, "16:00", 0);
        assert!(task.start());
        assert_eq!(task.status, TaskStatus::Running);
        // Already running: no-op
        assert!(!task.start());
        assert_eq!(task.status, TaskStatus::Running);
    }

    #[test]
    fn start_leaves_completed_and_errored_alone() {
        let mut done = AutomationTask::new(2, "Репосты", TaskStatus::Completed, "13:15", 100);
        assert!(!done.start());
        assert_eq!(done.status, TaskStatus::Completed);

        let mut failed = AutomationTask::new(4, "Публикация постов", TaskStatus::Error, "12:00", 45);
        assert!(!failed.start());
        assert_eq!(failed.status, TaskStatus::Error);
    }

    #[test]
    fn stop_only_moves_running_tasks() {
        let mut task = AutomationTask::new(1, "Массовый лайкинг", TaskStatus::Running, "14:30", 65);
        assert!(task.stop());
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.stop());
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn status_labels() {
        assert_eq!(TaskStatus::Pending.label(), "pending");
        assert_eq!(TaskStatus::Running.label(), "running");
        assert_eq!(TaskStatus::Completed.label(), "completed");
        assert_eq!(TaskStatus::Error.label(), "error");
    }
}
