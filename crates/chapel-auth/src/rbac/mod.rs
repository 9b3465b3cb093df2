//! Role gate for privileged operations.
//!
//! Roles are flat: a member either holds one of the allowed roles or the
//! call is refused. There is no inheritance between roles.

use tracing::debug;

use chapel_core::error::AppError;
use chapel_entity::member::{Member, MemberRole};

/// Passes the member through if their role is in `allowed`.
pub fn require_role<'a>(member: &'a Member, allowed: &[MemberRole]) -> Result<&'a Member, AppError> {
    if allowed.contains(&member.role) {
        Ok(member)
    } else {
        debug!(member_id = %member.id, role = %member.role, "Role gate refused");
        Err(AppError::forbidden("Not enough permissions"))
    }
}

/// The gate in front of every `/admin` operation.
pub fn require_staff(member: &Member) -> Result<&Member, AppError> {
    require_role(member, &MemberRole::STAFF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chapel_core::error::ErrorKind;
    use chapel_entity::member::NotificationPreference;
    use chrono::Utc;
    use uuid::Uuid;

    fn member(role: MemberRole) -> Member {
        Member {
            id: Uuid::new_v4(),
            first_name: "Test".into(),
            last_name: "Member".into(),
            email: "test@example.org".into(),
            phone: None,
            password_hash: String::new(),
            role,
            is_active: true,
            departments: vec![],
            notification_preference: NotificationPreference::Both,
            sms_opt_in: false,
            join_date: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_staff_gate_admits_admin_and_staff() {
        for role in [MemberRole::Admin, MemberRole::Staff] {
            assert!(require_staff(&member(role)).is_ok(), "{role} should pass");
        }
    }

    #[test]
    fn test_staff_gate_refuses_everyone_else() {
        for role in [
            MemberRole::Member,
            MemberRole::Usher,
            MemberRole::Choir,
            MemberRole::Deacon,
        ] {
            let err = require_staff(&member(role)).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Forbidden, "{role} should be refused");
        }
    }

    #[test]
    fn test_custom_role_list() {
        let deacon = member(MemberRole::Deacon);
        assert!(require_role(&deacon, &[MemberRole::Deacon, MemberRole::Admin]).is_ok());
        assert!(require_role(&deacon, &[]).is_err());
    }
}
