/// Represents a CI branch with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub is_release: bool,
}

impl BranchContext {
    /// Create a new branch context, classifying the branch against the
    /// configured release branches
    pub fn new(name: impl Into<String>, release_branches: &[String]) -> Self {
        let name_str = name.into();
        let is_release = release_branches.iter().any(|b| b == &name_str);

        BranchContext {
            name: name_str,
            is_release,
        }
    }

    /// Check if this branch consults the configuration store
    pub fn is_release_branch(&self) -> bool {
        self.is_release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release_branches() -> Vec<String> {
        vec!["master".to_string()]
    }

    #[test]
    fn test_master_branch() {
        let branch = BranchContext::new("master", &release_branches());
        assert!(branch.is_release);
        assert!(branch.is_release_branch());
    }

    #[test]
    fn test_feature_branch() {
        let branch = BranchContext::new("feature_x", &release_branches());
        assert!(!branch.is_release);
        assert!(!branch.is_release_branch());
    }

    #[test]
    fn test_empty_branch_name() {
        let branch = BranchContext::new("", &release_branches());
        assert!(!branch.is_release_branch());
    }

    #[test]
    fn test_custom_release_list() {
        let branches = vec!["main".to_string(), "master".to_string()];
        assert!(BranchContext::new("main", &branches).is_release_branch());
        assert!(BranchContext::new("master", &branches).is_release_branch());
        assert!(!BranchContext::new("develop", &branches).is_release_branch());
    }

    #[test]
    fn test_classification_is_exact_match() {
        // "master-hotfix" must not be mistaken for the release branch
        let branch = BranchContext::new("master-hotfix", &release_branches());
        assert!(!branch.is_release_branch());
    }
}
