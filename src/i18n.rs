/// UI text for the admin panel
///
/// Korean is the default; English is available for operators who set
/// `lang="en"` on the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strings {
    pub dashboard_title: &'static str,
    pub create_title: &'static str,
    pub create_submit: &'static str,
    pub edit_title: &'static str,
    pub edit_submit: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub confirm_delete_title: &'static str,
    pub confirm_delete: &'static str,
    pub delete_failed: &'static str,
    pub operation_failed: &'static str,
    pub credentials_invalid: &'static str,
    pub logout: &'static str,
    pub login_title: &'static str,
    pub login_submit: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub dismiss: &'static str,
    pub col_name: &'static str,
    pub col_address: &'static str,
    pub col_bot_token: &'static str,
    pub col_chat_id: &'static str,
    pub col_actions: &'static str,
    pub field_notification_url: &'static str,
    pub field_notification_api_key: &'static str,
    pub empty_list: &'static str,
}

const KO: Strings = Strings {
    dashboard_title: "지갑 관리",
    create_title: "새 지갑 추가",
    create_submit: "추가하기",
    edit_title: "지갑 정보 수정",
    edit_submit: "수정 완료",
    edit: "수정",
    delete: "삭제",
    cancel: "취소",
    confirm_delete_title: "지갑 삭제",
    confirm_delete: "정말로 이 지갑을 삭제하시겠습니까?",
    delete_failed: "삭제에 실패했습니다.",
    operation_failed: "작업에 실패했습니다.",
    credentials_invalid: "아이디 또는 비밀번호가 잘못되었습니다.",
    logout: "로그아웃",
    login_title: "관리자 로그인",
    login_submit: "로그인",
    username: "아이디",
    password: "비밀번호",
    dismiss: "닫기",
    col_name: "이름",
    col_address: "주소",
    col_bot_token: "봇 토큰",
    col_chat_id: "채팅 ID",
    col_actions: "관리",
    field_notification_url: "알림 URL",
    field_notification_api_key: "알림 API 키",
    empty_list: "등록된 지갑이 없습니다.",
};

const EN: Strings = Strings {
    dashboard_title: "Wallets",
    create_title: "Add new wallet",
    create_submit: "Add",
    edit_title: "Edit wallet",
    edit_submit: "Save changes",
    edit: "Edit",
    delete: "Delete",
    cancel: "Cancel",
    confirm_delete_title: "Delete wallet",
    confirm_delete: "Really delete this wallet?",
    delete_failed: "Delete failed.",
    operation_failed: "The operation failed.",
    credentials_invalid: "Incorrect username or password.",
    logout: "Log out",
    login_title: "Admin login",
    login_submit: "Log in",
    username: "Username",
    password: "Password",
    dismiss: "Dismiss",
    col_name: "Name",
    col_address: "Address",
    col_bot_token: "Bot token",
    col_chat_id: "Chat ID",
    col_actions: "Actions",
    field_notification_url: "Notification URL",
    field_notification_api_key: "Notification API key",
    empty_list: "No wallets yet.",
};

impl Locale {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }

    /// Parse a BCP 47 tag such as `en-US`; anything unknown is Korean
    pub fn from_tag(tag: &str) -> Self {
        match tag.split(['-', '_']).next().map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("en") => Locale::En,
            _ => Locale::Ko,
        }
    }

    /// Read the `lang` attribute of the host document
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .map(|lang| Self::from_tag(&lang))
            .unwrap_or_default()
    }
}
