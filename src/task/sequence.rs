//! Insertion-ordered task list
//!
//! `TaskSequence` is a singly linked list of owned nodes. Every positional
//! operation walks from the head, counting from 1, so positions are always
//! "distance from the front plus one" and shift after a removal.

use std::fmt;

use super::model::{FieldEdit, Task, TaskDraft, TaskId};

type Link = Option<Box<Node>>;

struct Node {
    task: Task,
    next: Link,
}

pub struct TaskSequence {
    head: Link,
    len: usize,
    next_id: u32,
}

impl Default for TaskSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSequence {
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append a task as the new last element and return its id.
    ///
    /// The description is stored as given; validation belongs to the caller.
    pub fn append(&mut self, draft: TaskDraft) -> TaskId {
        let id = TaskId::from_number(self.next_id);
        self.next_id += 1;

        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            task: Task::from_draft(id.clone(), draft),
            next: None,
        }));
        self.len += 1;

        id
    }

    /// Unlink the task at 1-based `position`.
    ///
    /// Returns false, leaving the list untouched, when `position` is 0 or
    /// past the end (including on an empty list).
    pub fn remove_at(&mut self, position: usize) -> bool {
        if position == 0 {
            return false;
        }

        let mut link = &mut self.head;
        for _ in 1..position {
            match link {
                Some(node) => link = &mut node.next,
                None => return false,
            }
        }

        match link.take() {
            Some(mut removed) => {
                *link = removed.next.take();
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Overwrite one field of the task at 1-based `position`.
    pub fn edit_field_at(&mut self, position: usize, edit: FieldEdit) -> bool {
        match self.get_mut(position) {
            Some(task) => {
                task.apply_edit(edit);
                true
            }
            None => false,
        }
    }

    /// Drop every task. Ids keep counting up afterwards.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Owned snapshot of the tasks in list order.
    pub fn to_list(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Task at 1-based `position`.
    pub fn get(&self, position: usize) -> Option<&Task> {
        let idx = position.checked_sub(1)?;
        self.iter().nth(idx)
    }

    fn get_mut(&mut self, position: usize) -> Option<&mut Task> {
        let idx = position.checked_sub(1)?;
        self.iter_mut().nth(idx)
    }

    /// Current 1-based position of the task with `id`.
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.iter()
            .position(|task| &task.id == id)
            .map(|idx| idx + 1)
    }

    /// Remove by stable id; resolves the id to its current position first.
    pub fn remove(&mut self, id: &TaskId) -> bool {
        match self.position_of(id) {
            Some(position) => self.remove_at(position),
            None => false,
        }
    }

    /// Edit by stable id.
    pub fn edit(&mut self, id: &TaskId, edit: FieldEdit) -> bool {
        match self.iter_mut().find(|task| &task.id == id) {
            Some(task) => {
                task.apply_edit(edit);
                true
            }
            None => false,
        }
    }
}

impl Drop for TaskSequence {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for TaskSequence {
    fn clone(&self) -> Self {
        let mut copy = TaskSequence::new();
        let mut link = &mut copy.head;
        for task in self.iter() {
            let node = link.insert(Box::new(Node {
                task: task.clone(),
                next: None,
            }));
            link = &mut node.next;
        }
        copy.len = self.len;
        copy.next_id = self.next_id;
        copy
    }
}

impl fmt::Debug for TaskSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<TaskDraft> for TaskSequence {
    fn from_iter<I: IntoIterator<Item = TaskDraft>>(iter: I) -> Self {
        let mut sequence = TaskSequence::new();
        for draft in iter {
            sequence.append(draft);
        }
        sequence
    }
}

impl<'a> IntoIterator for &'a TaskSequence {
    type Item = &'a Task;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.task
        })
    }
}

struct IterMut<'a> {
    next: Option<&'a mut Node>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Task;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.task
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, TaskField};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn descriptions(seq: &TaskSequence) -> Vec<String> {
        seq.iter().map(|t| t.description.clone()).collect()
    }

    fn sequence_of(names: &[&str]) -> TaskSequence {
        names.iter().map(|n| TaskDraft::new(*n)).collect()
    }

    #[test]
    fn test_new_sequence_is_empty() {
        let seq = TaskSequence::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert!(seq.to_list().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut seq = TaskSequence::new();
        seq.append(
            TaskDraft::new("Write report")
                .due(date(2024, 6, 1))
                .priority(Priority::High),
        );
        seq.append(TaskDraft::new("Buy milk"));

        let list = seq.to_list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].description, "Write report");
        assert_eq!(list[0].due_date, Some(date(2024, 6, 1)));
        assert_eq!(list[0].priority, Priority::High);
        assert_eq!(list[1].description, "Buy milk");
        assert_eq!(list[1].due_date, None);
        assert_eq!(list[1].priority, Priority::Low);
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut seq = TaskSequence::new();
        let a = seq.append(TaskDraft::new("a"));
        let b = seq.append(TaskDraft::new("b"));
        assert_eq!(a, TaskId::from_number(1));
        assert_eq!(b, TaskId::from_number(2));
    }

    #[test]
    fn test_append_accepts_duplicates() {
        let seq = sequence_of(&["same", "same"]);
        assert_eq!(seq.len(), 2);
        assert_ne!(seq.to_list()[0].id, seq.to_list()[1].id);
    }

    #[test]
    fn test_remove_first_until_empty() {
        let mut seq = sequence_of(&["Write report", "Buy milk"]);

        assert!(seq.remove_at(1));
        assert_eq!(descriptions(&seq), vec!["Buy milk"]);

        assert!(seq.remove_at(1));
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);

        assert!(!seq.remove_at(1));
    }

    #[test]
    fn test_remove_middle_relinks() {
        let mut seq = sequence_of(&["a", "b", "c"]);
        assert!(seq.remove_at(2));
        assert_eq!(descriptions(&seq), vec!["a", "c"]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_remove_last() {
        let mut seq = sequence_of(&["a", "b", "c"]);
        assert!(seq.remove_at(3));
        assert_eq!(descriptions(&seq), vec!["a", "b"]);
        seq.append(TaskDraft::new("d"));
        assert_eq!(descriptions(&seq), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut seq = sequence_of(&["a", "b"]);
        assert!(!seq.remove_at(0));
        assert!(!seq.remove_at(3));
        assert!(!seq.remove_at(usize::MAX));
        assert_eq!(descriptions(&seq), vec!["a", "b"]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_remove_on_empty_returns_false() {
        let mut seq = TaskSequence::new();
        assert!(!seq.remove_at(1));
    }

    #[test]
    fn test_remove_renumbers_following_tasks() {
        let mut seq = sequence_of(&["a", "b", "c"]);
        seq.remove_at(1);
        assert_eq!(seq.get(1).unwrap().description, "b");
        assert_eq!(seq.get(2).unwrap().description, "c");
        assert!(seq.get(3).is_none());
    }

    #[test]
    fn test_edit_priority_changes_only_priority() {
        let mut seq = TaskSequence::new();
        seq.append(TaskDraft::new("Call bank").priority(Priority::Medium));
        let before = seq.to_list();

        assert!(seq.edit_field_at(1, FieldEdit::Priority(Priority::High)));

        let after = seq.to_list();
        assert_eq!(after[0].priority, Priority::High);
        assert_eq!(after[0].priority.level(), 2);
        let mut expected = before[0].clone();
        expected.priority = Priority::High;
        assert_eq!(after[0], expected);
    }

    #[test]
    fn test_edit_leaves_other_tasks_untouched() {
        let mut seq = sequence_of(&["a", "b", "c"]);
        let before = seq.to_list();

        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(seq.edit_field_at(2, FieldEdit::StartTime(Some(nine))));

        let after = seq.to_list();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].start_time, Some(nine));
        assert_eq!(after[1].end_time, None);
    }

    #[test]
    fn test_edit_each_field() {
        let mut seq = sequence_of(&["a"]);
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

        assert!(seq.edit_field_at(1, FieldEdit::Description("renamed".to_string())));
        assert!(seq.edit_field_at(1, FieldEdit::DueDate(Some(date(2025, 1, 2)))));
        assert!(seq.edit_field_at(1, FieldEdit::EndTime(Some(noon))));

        let task = seq.get(1).unwrap();
        assert_eq!(task.description, "renamed");
        assert_eq!(task.due_date, Some(date(2025, 1, 2)));
        assert_eq!(task.end_time, Some(noon));

        assert!(seq.edit_field_at(1, FieldEdit::DueDate(None)));
        assert_eq!(seq.get(1).unwrap().due_date, None);
    }

    #[test]
    fn test_edit_invalid_position_is_noop() {
        let mut seq = sequence_of(&["a"]);
        let before = seq.to_list();
        assert!(!seq.edit_field_at(0, FieldEdit::Priority(Priority::High)));
        assert!(!seq.edit_field_at(2, FieldEdit::Priority(Priority::High)));
        assert_eq!(seq.to_list(), before);

        let mut empty = TaskSequence::new();
        assert!(!empty.edit_field_at(1, FieldEdit::Description("x".to_string())));
    }

    #[test]
    fn test_clear_empties_sequence() {
        let mut seq = sequence_of(&["a", "b", "c"]);
        seq.clear();
        assert!(seq.to_list().is_empty());
        assert_eq!(seq.len(), 0);

        seq.clear();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut seq = sequence_of(&["a", "b"]);
        seq.clear();
        let id = seq.append(TaskDraft::new("c"));
        assert_eq!(id, TaskId::from_number(3));
    }

    #[test]
    fn test_to_list_is_a_snapshot() {
        let mut seq = sequence_of(&["a", "b"]);
        let first = seq.to_list();
        let second = seq.to_list();
        assert_eq!(first, second);

        seq.remove_at(1);
        assert_eq!(first.len(), 2);
        assert_eq!(seq.to_list().len(), 1);
    }

    #[test]
    fn test_length_tracks_appends_minus_removals() {
        let mut seq = TaskSequence::new();
        let mut expected: Vec<String> = Vec::new();
        for i in 0..10 {
            let name = format!("task {}", i);
            seq.append(TaskDraft::new(name.clone()));
            expected.push(name);
        }
        for position in [10, 1, 4, 20, 4] {
            let removed = seq.remove_at(position);
            assert_eq!(removed, position <= expected.len());
            if removed {
                expected.remove(position - 1);
            }
        }
        assert_eq!(seq.len(), expected.len());
        assert_eq!(seq.to_list().len(), expected.len());
        assert_eq!(descriptions(&seq), expected);
    }

    #[test]
    fn test_id_operations_survive_renumbering() {
        let mut seq = TaskSequence::new();
        let a = seq.append(TaskDraft::new("a"));
        let b = seq.append(TaskDraft::new("b"));
        let c = seq.append(TaskDraft::new("c"));

        assert!(seq.remove(&a));
        assert_eq!(seq.position_of(&b), Some(1));
        assert_eq!(seq.position_of(&c), Some(2));

        assert!(seq.edit(&c, FieldEdit::Priority(Priority::High)));
        assert_eq!(seq.get(2).unwrap().priority, Priority::High);

        assert!(!seq.remove(&a));
        assert!(!seq.edit(&a, FieldEdit::Priority(Priority::Low)));
        assert_eq!(seq.position_of(&a), None);
    }

    #[test]
    fn test_stale_position_remove_returns_false() {
        let mut seq = sequence_of(&["a", "b"]);
        assert!(seq.remove_at(2));
        assert!(!seq.remove_at(2));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut seq = sequence_of(&["a", "b"]);
        let copy = seq.clone();
        seq.edit_field_at(1, FieldEdit::Description("changed".to_string()));
        seq.remove_at(2);

        assert_eq!(descriptions(&copy), vec!["a", "b"]);
        assert_eq!(copy.len(), 2);

        let mut copy = copy;
        let id = copy.append(TaskDraft::new("c"));
        assert_eq!(id, TaskId::from_number(3));
    }

    #[test]
    fn test_debug_lists_tasks() {
        let seq = sequence_of(&["a"]);
        let debug = format!("{:?}", seq);
        assert!(debug.contains("T001"));
        assert!(debug.starts_with('['));
    }

    #[test]
    fn test_long_sequence_drops_without_overflow() {
        let mut seq = TaskSequence::new();
        for _ in 0..200_000 {
            seq.append_front_for_test();
        }
        assert_eq!(seq.len(), 200_000);
        drop(seq);
    }

    #[test]
    fn test_field_of_edit_matches_target() {
        let edit = FieldEdit::EndTime(None);
        assert_eq!(edit.field(), TaskField::EndTime);
    }

    impl TaskSequence {
        /// O(1) prepend so the drop test does not pay for 200k tail walks.
        fn append_front_for_test(&mut self) {
            let id = TaskId::from_number(self.next_id);
            self.next_id += 1;
            let next = self.head.take();
            self.head = Some(Box::new(Node {
                task: Task::from_draft(id, TaskDraft::new("bulk")),
                next,
            }));
            self.len += 1;
        }
    }
}
