use futures::executor::block_on;
use kirakuji_core::{HomeFlow, Origin, RESULT_PLACEHOLDER, Step};
use kirakuji_web::components::home_modal::{self, HomeModal};
use kirakuji_web::components::language_select::{self, LanguageSelect};
use kirakuji_web::components::transition_overlay::{self, TransitionOverlay};
use kirakuji_web::pages::not_found::{self, NotFound};
use kirakuji_web::pages::result::{self, ResultView};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn render_home(flow: HomeFlow) -> String {
    kirakuji_web::i18n::set_lang("ja");
    let props = home_modal::Props {
        flow,
        on_edit: Callback::noop(),
        on_submit: Callback::noop(),
        on_draw: Callback::noop(),
        on_retry: Callback::noop(),
        on_close: Callback::noop(),
    };
    block_on(LocalServerRenderer::<HomeModal>::with_props(props).render())
}

fn open_flow(step: Step, content: &str) -> HomeFlow {
    HomeFlow {
        modal_open: true,
        step,
        content: content.to_string(),
        ..HomeFlow::default()
    }
}

#[test]
fn closed_modal_renders_nothing() {
    let html = render_home(HomeFlow::default());
    assert!(!html.contains("modal-backdrop"));
    assert!(!html.contains("kirakuji-input"));
}

#[test]
fn input_step_renders_dialog_and_disabled_submit() {
    let html = render_home(open_flow(Step::Input, "   "));
    assert!(html.contains(r#"role="dialog""#));
    assert!(html.contains(r#"aria-modal="true""#));
    assert!(html.contains("kirakuji-input"));
    assert!(html.contains(r#"maxlength="140""#));
    assert!(html.contains("ここに闇を投げる"));
    assert!(html.contains("懺悔する"));
    assert!(html.contains("閉じる"));
    assert!(html.contains("disabled"));
}

#[test]
fn valid_content_enables_submit_and_counts_characters() {
    let html = render_home(open_flow(Step::Input, "闇です"));
    assert!(!html.contains("disabled"));
    assert!(html.contains("3 / 140"));
}

#[test]
fn loading_step_shows_busy_progress() {
    let html = render_home(open_flow(Step::Loading(Origin::Post), "闇"));
    assert!(html.contains(r#"role="progressbar""#));
    assert!(html.contains(r#"aria-busy="true""#));
    assert!(html.contains("きらくじを引いています..."));
    assert!(!html.contains("kirakuji-input"));
}

#[test]
fn ready_step_offers_the_draw_button() {
    let html = render_home(open_flow(Step::Ready, "闇"));
    assert!(html.contains("投稿が完了しました。おみくじを引きますか？"));
    assert!(html.contains("/hurt_dark.png"));
    assert!(html.contains("闇を引く"));
}

#[test]
fn error_step_surfaces_message() {
    let html = render_home(open_flow(
        Step::Error("サーバーで問題が発生しました".into()),
        "闇",
    ));
    assert!(html.contains(r#"role="alert""#));
    assert!(html.contains("サーバーで問題が発生しました"));
    assert!(html.contains("入力画面へ戻る"));
}

#[test]
fn result_step_shows_fortune_in_modal() {
    let html = render_home(open_flow(Step::Result("大吉".into()), ""));
    assert!(html.contains("大吉"));
    assert!(html.contains("もう一度懺悔する"));
    assert!(!html.contains("result-card__share"));
}

#[test]
fn result_view_lays_out_placeholder_with_share_first() {
    kirakuji_web::i18n::set_lang("ja");
    let props = result::Props {
        text: AttrValue::from(RESULT_PLACEHOLDER),
        on_retry: Callback::noop(),
        on_share: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ResultView>::with_props(props).render());
    assert!(html.contains("今日のきらくじ:"));
    assert!(html.contains("ここに結果テキストが入ります。"));
    assert!(html.contains("/curtain.png"));

    let share = html.find("闇を押し付ける").expect("share button");
    let retry = html.find("Try again").expect("retry button");
    assert!(share < retry);
}

#[test]
fn overlay_carries_duration_and_progress_label() {
    kirakuji_web::i18n::set_lang("ja");
    let props = transition_overlay::Props {
        message: None,
        sub_message: Some(AttrValue::from("custom sub")),
        on_animation_complete: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TransitionOverlay>::with_props(props).render());
    assert!(html.contains("--kirakuji-transition-duration: 1600ms"));
    assert!(html.contains("画面を切り替えています"));
    assert!(html.contains("少し待ってて!あなたのためのお告げを探すから。"));
    assert!(html.contains("custom sub"));
    assert!(html.contains("/kirakuji.png"));
}

#[test]
fn not_found_renders_back_link() {
    kirakuji_web::i18n::set_lang("en");
    let props = not_found::Props {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to top"));
}

#[test]
fn language_select_offers_every_locale_and_marks_the_current_one() {
    kirakuji_web::i18n::set_lang("en");
    let props = language_select::Props {
        current_lang: AttrValue::from("en"),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LanguageSelect>::with_props(props).render());
    assert!(html.contains("id=\"lang-select\""));
    assert!(html.contains("日本語"));
    assert!(html.contains("English"));
    assert!(html.contains("Language"));
    kirakuji_web::i18n::set_lang("ja");
}
