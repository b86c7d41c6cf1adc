use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPlan {
    pub title: String,
    /// Index `i` holds the section count of chapter `i + 1`.
    pub section_counts: Vec<u32>,
}

impl BookPlan {
    pub fn new(title: impl Into<String>, section_counts: Vec<u32>) -> Self {
        Self {
            title: title.into(),
            section_counts,
        }
    }

    pub fn chapter_count(&self) -> u32 {
        self.section_counts.len() as u32
    }

    pub fn total_sections(&self) -> u64 {
        self.section_counts.iter().map(|&n| u64::from(n)).sum()
    }

    /// Every task of the plan, chapter-major.
    pub fn task_units(&self) -> Vec<TaskUnit> {
        self.section_counts
            .iter()
            .enumerate()
            .flat_map(|(idx, &sections)| {
                let chapter = idx as u32 + 1;
                (1..=sections).map(move |section| TaskUnit {
                    title: self.title.clone(),
                    chapter,
                    section,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub project_id: String,
    pub section_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUnit {
    pub title: String,
    pub chapter: u32,
    pub section: u32,
}

impl TaskUnit {
    pub fn content(&self) -> String {
        format!("[{}] {}_{}", self.title, self.chapter, self.section)
    }
}

/// Form body of a Todoist task-creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskForm {
    pub content: String,
    pub project_id: String,
    pub section_id: String,
}

impl CreateTaskForm {
    pub fn new(unit: &TaskUnit, destination: &Destination) -> Self {
        Self {
            content: unit.content(),
            project_id: destination.project_id.clone(),
            section_id: destination.section_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub submitted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failed_labels: Vec<String>,
}

impl DispatchReport {
    pub fn merge(&mut self, other: DispatchReport) {
        self.submitted += other.submitted;
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self.failed_labels.extend(other.failed_labels);
    }
}
