use crate::models::text_input::TextInput;

/// 추가 폼의 포커스 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Host,
    #[default]
    Directory,
    Save,
    Cancel,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Host,
        FormField::Directory,
        FormField::Save,
        FormField::Cancel,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// "디렉토리 추가" 폼 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub host: TextInput,
    pub dir: TextInput,
    pub focus: FormField,
    /// 저장 요청이 진행 중이면 입력을 잠금
    pub submitting: bool,
    host_candidates: Vec<String>,
}

impl EditForm {
    /// 호스트 후보 목록과 기본 호스트로 폼 생성
    pub fn new(default_host: Option<&str>, host_candidates: Vec<String>) -> Self {
        let host = default_host
            .map(str::to_string)
            .or_else(|| host_candidates.first().cloned())
            .unwrap_or_default();
        let focus = if host.is_empty() {
            FormField::Host
        } else {
            FormField::Directory
        };
        Self {
            host: TextInput::with_value(host),
            dir: TextInput::new(),
            focus,
            submitting: false,
            host_candidates,
        }
    }

    pub fn host_candidates(&self) -> &[String] {
        &self.host_candidates
    }

    /// 포커스된 텍스트 입력 (버튼 포커스면 None)
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            FormField::Host => Some(&mut self.host),
            FormField::Directory => Some(&mut self.dir),
            FormField::Save | FormField::Cancel => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// 호스트 후보 순환 (현재 값 기준 다음 후보)
    pub fn cycle_host(&mut self, forward: bool) {
        if self.host_candidates.is_empty() {
            return;
        }
        let len = self.host_candidates.len();
        let next = match self
            .host_candidates
            .iter()
            .position(|h| h == self.host.value())
        {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.host.set_value(self.host_candidates[next].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> Vec<String> {
        vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()]
    }

    #[test]
    fn test_new_form_prefers_default_host() {
        let form = EditForm::new(Some("beta"), hosts());
        assert_eq!(form.host.value(), "beta");
        assert_eq!(form.focus, FormField::Directory);
        assert!(!form.submitting);
    }

    #[test]
    fn test_new_form_falls_back_to_first_candidate_or_empty() {
        let form = EditForm::new(None, hosts());
        assert_eq!(form.host.value(), "alpha");

        let empty = EditForm::new(None, Vec::new());
        assert_eq!(empty.host.value(), "");
        assert_eq!(empty.focus, FormField::Host);
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut form = EditForm::new(Some("alpha"), hosts());
        form.focus_next();
        assert_eq!(form.focus, FormField::Save);
        form.focus_next();
        assert_eq!(form.focus, FormField::Cancel);
        form.focus_next();
        assert_eq!(form.focus, FormField::Host);
        form.focus_prev();
        assert_eq!(form.focus, FormField::Cancel);
        assert!(form.focused_input_mut().is_none());
    }

    #[test]
    fn test_cycle_host_wraps_and_handles_unknown_value() {
        let mut form = EditForm::new(Some("gamma"), hosts());
        form.cycle_host(true);
        assert_eq!(form.host.value(), "alpha");
        form.cycle_host(false);
        assert_eq!(form.host.value(), "gamma");

        form.host.set_value("typed-by-hand");
        form.cycle_host(false);
        assert_eq!(form.host.value(), "gamma");
    }
}
