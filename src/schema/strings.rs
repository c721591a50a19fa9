//! Fixed user-facing string tables, one per language

use super::types::Language;

pub struct UiText {
    pub title: &'static str,
    pub not_owned: &'static str,
    pub leveling_done: &'static str,
    pub remodel_done: &'static str,
    pub guide: &'static str,
    pub view_all: &'static str,
    pub view_incomplete: &'static str,
    pub export_image: &'static str,
    pub disclaimer: &'static str,
    pub server_notice: &'static str,
}

static KR: UiText = UiText {
    title: "설계도표",
    not_owned: "미보유",
    leveling_done: "레벨링 완료",
    remodel_done: "개장 완료",
    guide: "Enter 키를 누르면 개장 완료 처리됩니다.",
    view_all: "전체 보기",
    view_incomplete: "미개장만 보기",
    export_image: "이미지 저장",
    disclaimer: "※ 본 툴은 비공식 2차 창작물이며, 데이터 오류 및 사용상의 불이익에 대해 책임지지 않습니다.",
    server_notice: "데이터는 서버에 저장되지 않습니다",
};

static JP: UiText = UiText {
    title: "改装設計図管理表",
    not_owned: "未保有",
    leveling_done: "レベリング完了",
    remodel_done: "改装完了",
    guide: "Enterキーで改装完了になります。",
    view_all: "すべて表示",
    view_incomplete: "未改装のみ",
    export_image: "画像保存",
    disclaimer: "※ 本ツールは非公式であり、使用による不利益について一切の責任を負いません。",
    server_notice: "データはサーバーに保存されません",
};

static EN: UiText = UiText {
    title: "Ship Remodel Status",
    not_owned: "Not Owned",
    leveling_done: "Leveling Done",
    remodel_done: "Remodel Complete",
    guide: "Press Enter to mark as Remodel Complete.",
    view_all: "Show All",
    view_incomplete: "Incomplete Only",
    export_image: "Save Image",
    disclaimer: "※ Unofficial tool. No responsibility is taken for errors or issues caused by use.",
    server_notice: "Data is not saved on server",
};

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Kr => &KR,
        Language::Jp => &JP,
        Language::En => &EN,
    }
}
