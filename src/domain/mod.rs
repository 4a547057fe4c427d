//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    ACTION_FIELD, Action, CANDIDATE_ACTION_FIELD, CANDIDATE_SEARCH_ACTION, MobileOption, Operator,
    OptionValue,
};
pub use response::{AccountDetail, PipeResponse, Status, TemplateCandidate};
pub use validation::ValidationError;
pub use value::{ItemId, MobileNumber, Password, SmsText, Token, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn action_wire_names() {
        assert_eq!(Action::Login.as_str(), "login");
        assert_eq!(Action::GetAccountInfo.as_str(), "getaccountinfo");
        assert_eq!(Action::GetMobile.as_str(), "getmobile");
        assert_eq!(Action::GetSms.as_str(), "getsms");
        assert_eq!(Action::SendSms.as_str(), "sendsms");
        assert_eq!(Action::GetSendSmsState.as_str(), "getsendsmsstate");
        assert_eq!(Action::Release.as_str(), "release");
        assert_eq!(Action::AddIgnore.as_str(), "addignore");
        assert_eq!(Action::GetSms.to_string(), "getsms");
    }

    #[test]
    fn only_login_runs_without_token() {
        assert!(!Action::Login.requires_token());
        assert!(Action::GetAccountInfo.requires_token());
        assert!(Action::AddIgnore.requires_token());
    }

    #[test]
    fn operator_tags_round_trip() {
        for operator in [Operator::Mobile, Operator::Telecom, Operator::Unicom] {
            assert_eq!(Operator::from_tag(operator.tag()), Some(operator));
        }
        assert_eq!(Operator::Telecom.tag(), 2);
        assert_eq!(Operator::from_tag(0), None);
        assert_eq!(Operator::from_tag(4), None);
    }

    #[test]
    fn option_values_map_to_query_strings() {
        assert_eq!(OptionValue::from("abc").to_param(), "abc");
        assert_eq!(OptionValue::from(-42_i64).to_param(), "-42");
        assert_eq!(OptionValue::from(Operator::Unicom).to_param(), "3");
    }

    #[test]
    fn mobile_option_builder_sets_fields() {
        let option = MobileOption::default()
            .isp(Operator::Telecom)
            .province("Beijing")
            .extra("cardtype", 1_i64);
        assert_eq!(option.isp, Some(Operator::Telecom));
        assert_eq!(option.province.as_deref(), Some("Beijing"));
        assert_eq!(option.city, None);
        assert_eq!(option.extra.get("cardtype"), Some(&OptionValue::Int(1)));
    }
}
