/// a run-card entry of the form `<DEPT>/<FACILITY>`, such as `FD/S04`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacilityCode<'a> {
    pub raw: &'a str,
    pub department: Option<&'a str>,
    pub facility: &'a str,
}

impl<'a> FacilityCode<'a> {
    /// entries without a department prefix are read as a bare facility segment.
    pub fn parse(raw: &'a str) -> FacilityCode<'a> {
        let trimmed = raw.trim();
        match trimmed.split_once('/') {
            Some((department, facility)) => FacilityCode {
                raw: trimmed,
                department: Some(department),
                facility,
            },
            None => FacilityCode {
                raw: trimmed,
                department: None,
                facility: trimmed,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::FacilityCode;

    #[test]
    fn test_splits_department_prefix() {
        let code = FacilityCode::parse("FD/S04");
        assert_eq!(code.department, Some("FD"));
        assert_eq!(code.facility, "S04");
        assert_eq!(code.raw, "FD/S04");
    }

    #[test]
    fn test_bare_facility() {
        let code = FacilityCode::parse(" S12 ");
        assert_eq!(code.department, None);
        assert_eq!(code.facility, "S12");
    }
}
