use domain::message::Message;
use domain::responder::ResponseGenerator;
use infrastructure::config::Config;
use shared::types::Result;
use shared::utils::{pick_phrase, random_delay};
use std::time::Duration;

pub const CANNED_PHRASES: &[&str] = &[
    "잘 알아듣지 못하였어요 😵‍💫",
    "아이고... 이해를 못했네요 😵",
    "흠... 뭔 말인지 모르겠어요 😅",
    "당황스럽네요! 다시 한번 설명해주실까요? 😰",
    "어라? 무슨 뜻인지... 😳",
    "이해력이 부족한 것 같아요 😓",
    "아직 배우는 중이라... 😔",
    "??? 뭔소리여 😶",
    "헉... 어렵네요 😖",
    "이거... 뭐라고 해야할지 😐",
    "앗... 죄송해요 이해를 못했어요 😬",
    "으음... 복잡하네요 🤯",
    "저... 멍청해서 모르겠어요 🤤",
    "뇌정지 왔어요... 💀",
    "아직 공부가 부족한가봐요 📚😭",
    "음... 영어로 말해주시면... 아니 그래도 모를듯 🤡",
    "제가 AI가 맞나 싶어요... 🤖❓",
    "ChatGPT한테 물어보세요 😂",
    "구글 번역기보다 못한 것 같아요 🥲",
    "저 퇴사할게요... 👋😢",
    "뭔가... 알 것 같긴 한데... 모르겠어요 🫠",
    "한국어가 어려워요 ㅠㅠ 🇰🇷❓",
    "아... 네... 그렇군요... (못 알아들음) 😅",
    "천천히 말해주세요... 여전히 모를 것 같지만요 🐌",
    "이해했다고 거짓말하고 싶지만... 못했어요 😇",
    "뭔가 심오한 말씀이신 것 같은데... 🤔❓",
    "저희 회사에서 환불 가능한가요? 💸",
    "다른 AI 추천해드릴까요? 😂",
];

/// Placeholder replies after a fake typing pause. Input and history are ignored.
#[derive(Debug, Clone)]
pub struct CannedResponder {
    delay_min: Duration,
    delay_max: Duration,
}

impl CannedResponder {
    pub fn new(delay_min: Duration, delay_max: Duration) -> Self {
        Self {
            delay_min,
            delay_max,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.typing_delay_min, config.typing_delay_max)
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn pick(&self) -> &'static str {
        pick_phrase(CANNED_PHRASES)
    }
}

impl ResponseGenerator for CannedResponder {
    async fn generate(&self, _user_text: &str, _history: &[Message]) -> Result<String> {
        let delay = random_delay(self.delay_min, self.delay_max);
        tracing::debug!(delay_ms = delay.as_millis() as u64, "simulating typing");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(self.pick().to_string())
    }
}
