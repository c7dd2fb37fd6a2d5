// Old-form (kyūjitai) to new-form (shinjitai) kanji conversion.
//
// Pre-reform spellings survive in personal and place names (渡邊, 齋藤,
// 澤田) while dictionaries index the modern forms, so lookup keys are
// converted old-to-new. The mapping is one-to-one per character and no
// new form appears on the left-hand side, which makes the conversion
// idempotent.

use std::sync::LazyLock;

use hashbrown::HashMap;

const KYUUJITAI_PAIRS: &[(char, char)] = &[
    ('亞', '亜'), ('惡', '悪'), ('壓', '圧'), ('圍', '囲'), ('醫', '医'), ('爲', '為'),
    ('壹', '壱'), ('隱', '隠'), ('飮', '飲'), ('營', '営'), ('榮', '栄'), ('衞', '衛'),
    ('驛', '駅'), ('圓', '円'), ('緣', '縁'), ('艷', '艶'), ('鹽', '塩'), ('奧', '奥'),
    ('應', '応'), ('橫', '横'), ('歐', '欧'), ('毆', '殴'), ('櫻', '桜'), ('穩', '穏'),
    ('假', '仮'), ('價', '価'), ('畫', '画'), ('會', '会'), ('壞', '壊'), ('懷', '懐'),
    ('繪', '絵'), ('槪', '概'), ('擴', '拡'), ('殼', '殻'), ('覺', '覚'), ('學', '学'),
    ('嶽', '岳'), ('樂', '楽'), ('渴', '渇'), ('罐', '缶'), ('卷', '巻'), ('陷', '陥'),
    ('勸', '勧'), ('寬', '寛'), ('歡', '歓'), ('觀', '観'), ('關', '関'), ('巖', '巌'),
    ('顏', '顔'), ('歸', '帰'), ('氣', '気'), ('龜', '亀'), ('僞', '偽'), ('戲', '戯'),
    ('犧', '犠'), ('舊', '旧'), ('據', '拠'), ('擧', '挙'), ('虛', '虚'), ('峽', '峡'),
    ('挾', '挟'), ('狹', '狭'), ('鄕', '郷'), ('曉', '暁'), ('區', '区'), ('驅', '駆'),
    ('勳', '勲'), ('薰', '薫'), ('徑', '径'), ('惠', '恵'), ('揭', '掲'), ('溪', '渓'),
    ('經', '経'), ('螢', '蛍'), ('輕', '軽'), ('繼', '継'), ('鷄', '鶏'), ('藝', '芸'),
    ('擊', '撃'), ('缺', '欠'), ('儉', '倹'), ('劍', '剣'), ('圈', '圏'), ('檢', '検'),
    ('權', '権'), ('獻', '献'), ('硏', '研'), ('縣', '県'), ('險', '険'), ('顯', '顕'),
    ('驗', '験'), ('嚴', '厳'), ('效', '効'), ('廣', '広'), ('恆', '恒'), ('鑛', '鉱'),
    ('號', '号'), ('國', '国'), ('黑', '黒'), ('濟', '済'), ('碎', '砕'), ('齋', '斎'),
    ('劑', '剤'), ('雜', '雑'), ('參', '参'), ('慘', '惨'), ('棧', '桟'), ('蠶', '蚕'),
    ('贊', '賛'), ('殘', '残'), ('絲', '糸'), ('齒', '歯'), ('兒', '児'), ('辭', '辞'),
    ('濕', '湿'), ('實', '実'), ('寫', '写'), ('釋', '釈'), ('壽', '寿'), ('收', '収'),
    ('從', '従'), ('澁', '渋'), ('獸', '獣'), ('縱', '縦'), ('肅', '粛'), ('處', '処'),
    ('緖', '緒'), ('敍', '叙'), ('尙', '尚'), ('奬', '奨'), ('將', '将'), ('燒', '焼'),
    ('稱', '称'), ('證', '証'), ('乘', '乗'), ('剩', '剰'), ('壤', '壌'), ('孃', '嬢'),
    ('條', '条'), ('淨', '浄'), ('狀', '状'), ('疊', '畳'), ('讓', '譲'), ('釀', '醸'),
    ('囑', '嘱'), ('觸', '触'), ('寢', '寝'), ('愼', '慎'), ('眞', '真'), ('盡', '尽'),
    ('圖', '図'), ('粹', '粋'), ('醉', '酔'), ('隨', '随'), ('髓', '髄'), ('數', '数'),
    ('樞', '枢'), ('瀨', '瀬'), ('聲', '声'), ('靑', '青'), ('靜', '静'), ('齊', '斉'),
    ('攝', '摂'), ('竊', '窃'), ('專', '専'), ('戰', '戦'), ('淺', '浅'), ('潛', '潜'),
    ('纖', '繊'), ('踐', '践'), ('錢', '銭'), ('禪', '禅'), ('曾', '曽'), ('雙', '双'),
    ('壯', '壮'), ('搜', '捜'), ('插', '挿'), ('巢', '巣'), ('莊', '荘'), ('裝', '装'),
    ('騷', '騒'), ('增', '増'), ('臟', '臓'), ('藏', '蔵'), ('卽', '即'), ('屬', '属'),
    ('續', '続'), ('墮', '堕'), ('體', '体'), ('對', '対'), ('帶', '帯'), ('滯', '滞'),
    ('臺', '台'), ('瀧', '滝'), ('擇', '択'), ('澤', '沢'), ('擔', '担'), ('膽', '胆'),
    ('團', '団'), ('彈', '弾'), ('斷', '断'), ('癡', '痴'), ('遲', '遅'), ('晝', '昼'),
    ('蟲', '虫'), ('鑄', '鋳'), ('廳', '庁'), ('聽', '聴'), ('敕', '勅'), ('鎭', '鎮'),
    ('遞', '逓'), ('鐵', '鉄'), ('轉', '転'), ('點', '点'), ('傳', '伝'), ('燈', '灯'),
    ('當', '当'), ('黨', '党'), ('盜', '盗'), ('稻', '稲'), ('德', '徳'), ('獨', '独'),
    ('讀', '読'), ('屆', '届'), ('繩', '縄'), ('貳', '弐'), ('惱', '悩'), ('腦', '脳'),
    ('霸', '覇'), ('廢', '廃'), ('拜', '拝'), ('賣', '売'), ('麥', '麦'), ('發', '発'),
    ('髮', '髪'), ('拔', '抜'), ('晚', '晩'), ('蠻', '蛮'), ('祕', '秘'), ('濱', '浜'),
    ('甁', '瓶'), ('彥', '彦'), ('拂', '払'), ('佛', '仏'), ('倂', '併'), ('竝', '並'),
    ('變', '変'), ('邊', '辺'), ('邉', '辺'), ('辨', '弁'), ('瓣', '弁'), ('辯', '弁'),
    ('舖', '舗'), ('步', '歩'), ('寶', '宝'), ('豐', '豊'), ('沒', '没'), ('飜', '翻'),
    ('每', '毎'), ('萬', '万'), ('滿', '満'), ('麵', '麺'), ('默', '黙'), ('彌', '弥'),
    ('藥', '薬'), ('譯', '訳'), ('豫', '予'), ('餘', '余'), ('與', '与'), ('譽', '誉'),
    ('搖', '揺'), ('樣', '様'), ('謠', '謡'), ('來', '来'), ('賴', '頼'), ('亂', '乱'),
    ('覽', '覧'), ('龍', '竜'), ('兩', '両'), ('獵', '猟'), ('綠', '緑'), ('壘', '塁'),
    ('淚', '涙'), ('勵', '励'), ('禮', '礼'), ('隸', '隷'), ('靈', '霊'), ('齡', '齢'),
    ('戀', '恋'), ('爐', '炉'), ('勞', '労'), ('樓', '楼'), ('郞', '郎'), ('祿', '禄'),
    ('錄', '録'), ('灣', '湾'), ('淸', '清'), ('驒', '騨'),
];

static SHINJITAI: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| KYUUJITAI_PAIRS.iter().copied().collect());

/// Replaces every old-form kanji in `s` with its modern equivalent.
/// Characters without an old form pass through, so the result equals the
/// input when nothing converts.
pub fn kyuujitai_to_shinjitai(s: &str) -> String {
    s.chars()
        .map(|c| SHINJITAI.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_common_name_kanji() {
        assert_eq!(kyuujitai_to_shinjitai("渡邊"), "渡辺");
        assert_eq!(kyuujitai_to_shinjitai("齋藤"), "斎藤");
        assert_eq!(kyuujitai_to_shinjitai("澤田"), "沢田");
        assert_eq!(kyuujitai_to_shinjitai("濱口"), "浜口");
        assert_eq!(kyuujitai_to_shinjitai("國分寺"), "国分寺");
    }

    #[test]
    fn mixed_text_converts_only_old_forms() {
        assert_eq!(kyuujitai_to_shinjitai("眞田たろう"), "真田たろう");
    }

    #[test]
    fn modern_text_is_unchanged() {
        assert_eq!(kyuujitai_to_shinjitai("山田太郎"), "山田太郎");
        assert_eq!(kyuujitai_to_shinjitai("やまだ"), "やまだ");
        assert_eq!(kyuujitai_to_shinjitai(""), "");
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = kyuujitai_to_shinjitai("舊體制の鐵道驛");
        let twice = kyuujitai_to_shinjitai(&once);
        assert_eq!(once, "旧体制の鉄道駅");
        assert_eq!(once, twice);
    }

    #[test]
    fn table_is_one_to_one_and_acyclic() {
        assert_eq!(SHINJITAI.len(), KYUUJITAI_PAIRS.len(), "duplicate old form");
        for &(old, new) in KYUUJITAI_PAIRS {
            assert_ne!(old, new);
            assert!(
                !SHINJITAI.contains_key(&new),
                "{new} appears as both old and new form"
            );
        }
    }
}
