//! Navigation-related state types.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,
    PostJob,
    EditJob,
}

impl View {
    /// Return whether the view shows the job form.
    ///
    pub fn is_form(&self) -> bool {
        matches!(self, View::PostJob | View::EditJob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_is_form() {
        assert!(!View::Home.is_form());
        assert!(View::PostJob.is_form());
        assert!(View::EditJob.is_form());
    }
}
