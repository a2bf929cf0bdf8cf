use crate::domain::model::ParameterDescriptor;

/// Which list a descriptor belongs to; decides the placeholder prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Parameter,
    Return,
}

impl Role {
    fn prefix(self) -> char {
        match self {
            Role::Parameter => 'a',
            Role::Return => 'r',
        }
    }
}

/// Keep a declared name, or synthesize `a<index>` / `r<index>`.
///
/// `index` is the zero-based position inside the method's own parameter (or
/// return) list. The blank identifier binds nothing that could be forwarded,
/// so it is replaced like a missing name.
pub fn name_or_synthesize(declared: &str, index: usize, role: Role) -> String {
    if declared.is_empty() || declared == "_" {
        format!("{}{}", role.prefix(), index)
    } else {
        declared.to_string()
    }
}

/// Fill every missing name of one list in place.
pub fn synthesize_names(descriptors: &mut [ParameterDescriptor], role: Role) {
    for (index, descriptor) in descriptors.iter_mut().enumerate() {
        descriptor.name = name_or_synthesize(&descriptor.name, index, role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_name_is_kept() {
        assert_eq!(name_or_synthesize("id", 0, Role::Parameter), "id");
        assert_eq!(name_or_synthesize("err", 3, Role::Return), "err");
    }

    #[test]
    fn test_missing_names_use_role_prefix() {
        assert_eq!(name_or_synthesize("", 0, Role::Parameter), "a0");
        assert_eq!(name_or_synthesize("", 2, Role::Return), "r2");
    }

    #[test]
    fn test_blank_identifier_is_replaced() {
        assert_eq!(name_or_synthesize("_", 1, Role::Parameter), "a1");
    }

    #[test]
    fn test_synthesize_names_uses_position_in_list() {
        let mut returns = vec![
            ParameterDescriptor::new("", "User"),
            ParameterDescriptor::new("", "error"),
        ];
        synthesize_names(&mut returns, Role::Return);
        let names: Vec<_> = returns.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["r0", "r1"]);
    }
}
