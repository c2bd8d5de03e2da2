/// 커서를 가진 한 줄 입력 버퍼
///
/// 커서는 바이트 오프셋이며 항상 문자 경계에 위치합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기값을 가진 입력 (커서는 끝)
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 값 교체 (커서는 끝으로)
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_char_start(self.cursor);
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_start(self.cursor);
        }
    }

    pub fn right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W)
    ///
    /// 경로 입력이 대부분이라 '/'도 단어 구분자로 취급합니다.
    pub fn delete_prev_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let original = self.cursor;
        let mut pos = original;

        // 1) 커서 왼쪽의 구분자들을 먼저 건너뜀
        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if !Self::char_at(&self.value, prev).is_some_and(Self::is_word_delimiter) {
                break;
            }
            pos = prev;
        }

        // 2) 단어 시작까지 이동
        while pos > 0 {
            let prev = self.prev_char_start(pos);
            if Self::char_at(&self.value, prev).is_some_and(Self::is_word_delimiter) {
                break;
            }
            pos = prev;
        }

        self.value.replace_range(pos..original, "");
        self.cursor = pos;
    }

    fn prev_char_start(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn char_at(value: &str, pos: usize) -> Option<char> {
        value[pos..].chars().next()
    }

    fn is_word_delimiter(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '/' | '\\' | ':' | '.' | '-' | '_')
    }
}
