use crate::api::{Candidate, CandidateStatus, Resignation, ResignationStatus};

pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

impl HasStatus for Resignation {
    type Status = ResignationStatus;

    fn status(&self) -> ResignationStatus {
        self.status
    }
}

impl HasStatus for Candidate {
    type Status = CandidateStatus;

    fn status(&self) -> CandidateStatus {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTab<S> {
    #[default]
    All,
    Only(S),
}

impl<S: Copy + PartialEq> StatusTab<S> {
    pub fn matches(self, status: S) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::Only(wanted) => wanted == status,
        }
    }

    pub fn as_filter(self) -> Option<S> {
        match self {
            StatusTab::All => None,
            StatusTab::Only(status) => Some(status),
        }
    }

    /// `All` followed by one tab per status, in the given order.
    pub fn tabs(statuses: &[S]) -> Vec<Self> {
        std::iter::once(StatusTab::All)
            .chain(statuses.iter().copied().map(StatusTab::Only))
            .collect()
    }
}

pub fn filter_by_status<T: HasStatus + Clone>(items: &[T], tab: StatusTab<T::Status>) -> Vec<T> {
    items
        .iter()
        .filter(|item| tab.matches(item.status()))
        .cloned()
        .collect()
}

pub fn count_for_tab<T: HasStatus>(items: &[T], tab: StatusTab<T::Status>) -> usize {
    items.iter().filter(|item| tab.matches(item.status())).count()
}
