// src/services/shen_sha/tables.rs
//
// 神煞查詢表。全部為固定資料，程序啟動後只讀。

use crate::models::{EarthlyBranch, HeavenlyStem};
use EarthlyBranch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, WuHorse, Xu, Yin, You, Zi};
use HeavenlyStem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};

/// 天德貴人的目標可能是天干或地支。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Stem(HeavenlyStem),
    Branch(EarthlyBranch),
}

/// 天乙貴人：以日干查，看其他柱的地支
pub const TIANYI_GUIREN: [(HeavenlyStem, &[EarthlyBranch]); 10] = [
    (Jia, &[Chou, Wei]),
    (Yi, &[Zi, Shen]),
    (Bing, &[Hai, You]),
    (Ding, &[Hai, You]),
    (Wu, &[Chou, Wei]),
    (Ji, &[Zi, Shen]),
    (Geng, &[Chou, Wei]),
    (Xin, &[WuHorse, Yin]),
    (Ren, &[Mao, Si]),
    (Gui, &[Mao, Si]),
];

/// 文昌貴人：以日干查
pub const WENCHANG: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Si),
    (Yi, WuHorse),
    (Bing, Shen),
    (Ding, You),
    (Wu, Shen),
    (Ji, You),
    (Geng, Hai),
    (Xin, Zi),
    (Ren, Yin),
    (Gui, Mao),
];

/// 桃花（咸池）：以日支或年支的三合局查
pub const TAOHUA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, You),
    (Zi, You),
    (Chen, You), // 申子辰見酉
    (Yin, Mao),
    (WuHorse, Mao),
    (Xu, Mao), // 寅午戌見卯
    (Si, WuHorse),
    (You, WuHorse),
    (Chou, WuHorse), // 巳酉丑見午
    (Hai, Zi),
    (Mao, Zi),
    (Wei, Zi), // 亥卯未見子
];

/// 驛馬：以日支或年支的三合局查
pub const YIMA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Yin),
    (Zi, Yin),
    (Chen, Yin), // 申子辰見寅
    (Yin, Shen),
    (WuHorse, Shen),
    (Xu, Shen), // 寅午戌見申
    (Si, Hai),
    (You, Hai),
    (Chou, Hai), // 巳酉丑見亥
    (Hai, Si),
    (Mao, Si),
    (Wei, Si), // 亥卯未見巳
];

/// 華蓋：以日支或年支的三合局查
pub const HUAGAI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Chen),
    (Zi, Chen),
    (Chen, Chen), // 申子辰見辰
    (Yin, Xu),
    (WuHorse, Xu),
    (Xu, Xu), // 寅午戌見戌
    (Si, Chou),
    (You, Chou),
    (Chou, Chou), // 巳酉丑見丑
    (Hai, Wei),
    (Mao, Wei),
    (Wei, Wei), // 亥卯未見未
];

/// 將星：以日支或年支的三合局查
pub const JIANGXING: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Zi),
    (Zi, Zi),
    (Chen, Zi), // 申子辰見子
    (Yin, WuHorse),
    (WuHorse, WuHorse),
    (Xu, WuHorse), // 寅午戌見午
    (Si, You),
    (You, You),
    (Chou, You), // 巳酉丑見酉
    (Hai, Mao),
    (Mao, Mao),
    (Wei, Mao), // 亥卯未見卯
];

/// 祿神：以日干查
pub const LUSHEN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Yin),
    (Yi, Mao),
    (Bing, Si),
    (Ding, WuHorse),
    (Wu, Si),
    (Ji, WuHorse),
    (Geng, Shen),
    (Xin, You),
    (Ren, Hai),
    (Gui, Zi),
];

/// 羊刃：以日干查，陽干才有
pub const YANGREN: [(HeavenlyStem, EarthlyBranch); 5] = [
    (Jia, Mao),
    (Bing, WuHorse),
    (Wu, WuHorse),
    (Geng, You),
    (Ren, Zi),
];

/// 天德貴人：以月支查，目標干支混見
pub const TIANDE: [(EarthlyBranch, Symbol); 12] = [
    (Yin, Symbol::Stem(Ding)),
    (Mao, Symbol::Branch(Shen)),
    (Chen, Symbol::Stem(Ren)),
    (Si, Symbol::Stem(Xin)),
    (WuHorse, Symbol::Branch(Hai)),
    (Wei, Symbol::Stem(Jia)),
    (Shen, Symbol::Stem(Gui)),
    (You, Symbol::Branch(Yin)),
    (Xu, Symbol::Stem(Bing)),
    (Hai, Symbol::Stem(Yi)),
    (Zi, Symbol::Branch(Si)),
    (Chou, Symbol::Stem(Geng)),
];

/// 月德貴人：以月支查，看四柱天干
pub const YUEDE: [(EarthlyBranch, HeavenlyStem); 12] = [
    (Yin, Bing),
    (WuHorse, Bing),
    (Xu, Bing), // 寅午戌月見丙
    (Shen, Ren),
    (Zi, Ren),
    (Chen, Ren), // 申子辰月見壬
    (Hai, Jia),
    (Mao, Jia),
    (Wei, Jia), // 亥卯未月見甲
    (Si, Geng),
    (You, Geng),
    (Chou, Geng), // 巳酉丑月見庚
];

/// 金輿：以日干查
pub const JINYU: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Chen),
    (Yi, Si),
    (Bing, Wei),
    (Ding, Shen),
    (Wu, Wei),
    (Ji, Shen),
    (Geng, Xu),
    (Xin, Hai),
    (Ren, Chou),
    (Gui, Yin),
];

/// 劫煞：以日支或年支查
pub const JIESHA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Si),
    (Zi, Si),
    (Chen, Si), // 申子辰見巳
    (Yin, Hai),
    (WuHorse, Hai),
    (Xu, Hai), // 寅午戌見亥
    (Si, Yin),
    (You, Yin),
    (Chou, Yin), // 巳酉丑見寅
    (Hai, Shen),
    (Mao, Shen),
    (Wei, Shen), // 亥卯未見申
];

/// 亡神：以日支或年支查
pub const WANGSHEN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Hai),
    (Zi, Hai),
    (Chen, Hai), // 申子辰見亥
    (Yin, Si),
    (WuHorse, Si),
    (Xu, Si), // 寅午戌見巳
    (Si, Shen),
    (You, Shen),
    (Chou, Shen), // 巳酉丑見申
    (Hai, Yin),
    (Mao, Yin),
    (Wei, Yin), // 亥卯未見寅
];

/// 孤辰：以年支查
pub const GUCHEN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Hai, Yin),
    (Zi, Yin),
    (Chou, Yin),
    (Yin, Si),
    (Mao, Si),
    (Chen, Si),
    (Si, Shen),
    (WuHorse, Shen),
    (Wei, Shen),
    (Shen, Hai),
    (You, Hai),
    (Xu, Hai),
];

/// 寡宿：以年支查
pub const GUASU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Hai, Xu),
    (Zi, Xu),
    (Chou, Xu),
    (Yin, Chou),
    (Mao, Chou),
    (Chen, Chou),
    (Si, Chen),
    (WuHorse, Chen),
    (Wei, Chen),
    (Shen, Wei),
    (You, Wei),
    (Xu, Wei),
];

/// 天廚貴人：以日干查
pub const TIANCHU: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Si),
    (Yi, WuHorse),
    (Bing, Si),
    (Ding, Shen),
    (Wu, Shen),
    (Ji, Mao),
    (Geng, Hai),
    (Xin, You),
    (Ren, Yin),
    (Gui, Zi),
];

/// 福星貴人：以日干查
pub const FUXING: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Yin),
    (Yi, Chou),
    (Bing, Hai),
    (Ding, Xu),
    (Wu, Shen),
    (Ji, Wei),
    (Geng, Si),
    (Xin, Chen),
    (Ren, Yin),
    (Gui, Chou),
];

/// 國印貴人：以日干查
pub const GUOYIN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Xu),
    (Yi, Hai),
    (Bing, Chou),
    (Ding, Yin),
    (Wu, Chou),
    (Ji, Yin),
    (Geng, Chen),
    (Xin, Si),
    (Ren, Wei),
    (Gui, Shen),
];

/// 學堂：以日干查
pub const XUETANG: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Hai),
    (Yi, WuHorse),
    (Bing, Yin),
    (Ding, You),
    (Wu, Yin),
    (Ji, You),
    (Geng, Si),
    (Xin, Zi),
    (Ren, Shen),
    (Gui, Mao),
];

/// 詞館：以日干查
pub const CIGUAN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Yin),
    (Yi, Chou),
    (Bing, Shen),
    (Ding, Si),
    (Wu, Shen),
    (Ji, Si),
    (Geng, Hai),
    (Xin, Xu),
    (Ren, Yin),
    (Gui, Hai),
];

/// 魁罡：以日柱干支組合查
pub const KUIGANG: [(HeavenlyStem, EarthlyBranch); 4] =
    [(Geng, Chen), (Geng, Xu), (Ren, Chen), (Wu, Xu)];

/// 災煞：以日支或年支查
pub const ZAISHA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, WuHorse),
    (Zi, WuHorse),
    (Chen, WuHorse), // 申子辰見午
    (Yin, Zi),
    (WuHorse, Zi),
    (Xu, Zi), // 寅午戌見子
    (Si, Mao),
    (You, Mao),
    (Chou, Mao), // 巳酉丑見卯
    (Hai, You),
    (Mao, You),
    (Wei, You), // 亥卯未見酉
];

/// 天煞：以日支或年支查
pub const TIANSHA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Xu),
    (Zi, Xu),
    (Chen, Xu), // 申子辰見戌
    (Yin, Chen),
    (WuHorse, Chen),
    (Xu, Chen), // 寅午戌見辰
    (Si, Chou),
    (You, Chou),
    (Chou, Chou), // 巳酉丑見丑
    (Hai, Wei),
    (Mao, Wei),
    (Wei, Wei), // 亥卯未見未
];

/// 地煞：以日支或年支查
pub const DISHA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Shen, Chen),
    (Zi, Chen),
    (Chen, Chen), // 申子辰見辰
    (Yin, Xu),
    (WuHorse, Xu),
    (Xu, Xu), // 寅午戌見戌
    (Si, Wei),
    (You, Wei),
    (Chou, Wei), // 巳酉丑見未
    (Hai, Chou),
    (Mao, Chou),
    (Wei, Chou), // 亥卯未見丑
];

/// 紅艷煞：以日干查
pub const HONGYAN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, WuHorse),
    (Yi, Shen),
    (Bing, Yin),
    (Ding, Wei),
    (Wu, Chen),
    (Ji, Chen),
    (Geng, Xu),
    (Xin, You),
    (Ren, Zi),
    (Gui, Shen),
];

/// 流霞煞：以日干查
pub const LIUXIA: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, You),
    (Yi, Xu),
    (Bing, Wei),
    (Ding, Shen),
    (Wu, Wei),
    (Ji, Shen),
    (Geng, Si),
    (Xin, WuHorse),
    (Ren, Mao),
    (Gui, Chen),
];

/// 血刃：以日干查
pub const XUEREN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Mao),
    (Yi, Chen),
    (Bing, WuHorse),
    (Ding, Wei),
    (Wu, WuHorse),
    (Ji, Wei),
    (Geng, You),
    (Xin, Xu),
    (Ren, Zi),
    (Gui, Chou),
];

/// 天醫：以月支查
pub const TIANYI_DOCTOR: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Hai),
    (Chou, Zi),
    (Yin, Chou),
    (Mao, Yin),
    (Chen, Mao),
    (Si, Chen),
    (WuHorse, Si),
    (Wei, WuHorse),
    (Shen, Wei),
    (You, Shen),
    (Xu, You),
    (Hai, Xu),
];

/// 太極貴人：以日干查
pub const TAIJI: [(HeavenlyStem, &[EarthlyBranch]); 10] = [
    (Jia, &[Zi, WuHorse]),
    (Yi, &[Zi, WuHorse]),
    (Bing, &[Mao, You]),
    (Ding, &[Mao, You]),
    (Wu, &[Chen, Xu, Chou, Wei]),
    (Ji, &[Chen, Xu, Chou, Wei]),
    (Geng, &[Yin, Hai]),
    (Xin, &[Yin, Hai]),
    (Ren, &[Si, Shen]),
    (Gui, &[Si, Shen]),
];

/// 三奇貴人：天上甲戊庚、地上乙丙丁、人中壬癸辛
pub const SANQI_TIAN: [HeavenlyStem; 3] = [Jia, Wu, Geng];
pub const SANQI_DI: [HeavenlyStem; 3] = [Yi, Bing, Ding];
pub const SANQI_REN: [HeavenlyStem; 3] = [Ren, Gui, Xin];

/// 天喜：以年支查
pub const TIANXI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, You),
    (Chou, Shen),
    (Yin, Wei),
    (Mao, WuHorse),
    (Chen, Si),
    (Si, Chen),
    (WuHorse, Mao),
    (Wei, Yin),
    (Shen, Chou),
    (You, Zi),
    (Xu, Hai),
    (Hai, Xu),
];

/// 紅鸞：以年支查
pub const HONGLUAN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Mao),
    (Chou, Yin),
    (Yin, Chou),
    (Mao, Zi),
    (Chen, Hai),
    (Si, Xu),
    (WuHorse, You),
    (Wei, Shen),
    (Shen, Wei),
    (You, WuHorse),
    (Xu, Si),
    (Hai, Chen),
];

/// 天赦日：季節月支 + 特定日柱
pub const TIANSHE: [(&[EarthlyBranch], HeavenlyStem, EarthlyBranch); 5] = [
    (&[Yin, Mao], Wu, Yin),             // 春季戊寅日
    (&[Si, WuHorse], Jia, WuHorse),     // 夏季甲午日
    (&[Shen, You], Wu, Shen),           // 秋季戊申日
    (&[Hai, Zi], Jia, Zi),              // 冬季甲子日
    (&[Chen, Xu, Chou, Wei], Wu, Chen), // 四季月戊辰日
];

/// 陰陽差錯：特定日柱組合
pub const YINYANG_CHACUO: [(HeavenlyStem, EarthlyBranch); 12] = [
    (Bing, Zi),
    (Ding, Chou),
    (Wu, Yin),
    (Xin, Mao),
    (Ren, Chen),
    (Gui, Si),
    (Bing, WuHorse),
    (Ding, Wei),
    (Wu, Shen),
    (Xin, You),
    (Ren, Xu),
    (Gui, Hai),
];

/// 十惡大敗：特定日柱組合
pub const SHIE_DABAI: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Chen),
    (Yi, Si),
    (Bing, Shen),
    (Ding, Hai),
    (Wu, Xu),
    (Ji, Chou),
    (Geng, Chen),
    (Xin, Si),
    (Ren, Shen),
    (Gui, Hai),
];

/// 月德合：以月支查，看四柱天干
pub const YUEDE_HE: [(EarthlyBranch, HeavenlyStem); 12] = [
    (Yin, Xin),
    (WuHorse, Xin),
    (Xu, Xin), // 寅午戌月見辛（丙合辛）
    (Shen, Ding),
    (Zi, Ding),
    (Chen, Ding), // 申子辰月見丁（壬合丁）
    (Hai, Ji),
    (Mao, Ji),
    (Wei, Ji), // 亥卯未月見己（甲合己）
    (Si, Yi),
    (You, Yi),
    (Chou, Yi), // 巳酉丑月見乙（庚合乙）
];

/// 天德合：以月支查，只有天干天德才有合
pub const TIANDE_HE: [(EarthlyBranch, HeavenlyStem); 8] = [
    (Yin, Ren),  // 天德丁，合壬
    (Chen, Ding), // 天德壬，合丁
    (Si, Bing),  // 天德辛，合丙
    (Wei, Ji),   // 天德甲，合己
    (Shen, Wu),  // 天德癸，合戊
    (Xu, Xin),   // 天德丙，合辛
    (Hai, Geng), // 天德乙，合庚
    (Chou, Yi),  // 天德庚，合乙
];

/// 六秀日：特定日柱組合
pub const LIUXIU: [(HeavenlyStem, EarthlyBranch); 6] = [
    (Bing, WuHorse),
    (Ding, Wei),
    (Wu, Zi),
    (Ji, Chou),
    (Gui, Si),
    (Gui, You),
];

/// 八專日：特定日柱組合
pub const BAZHUAN: [(HeavenlyStem, EarthlyBranch); 8] = [
    (Jia, Yin),
    (Yi, Mao),
    (Wu, Chen),
    (Ji, Wei),
    (Geng, Shen),
    (Xin, You),
    (Ren, Zi),
    (Gui, Hai),
];

/// 弔客：以年支查
pub const DIAOKE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Xu),
    (Chou, Hai),
    (Yin, Zi),
    (Mao, Chou),
    (Chen, Yin),
    (Si, Mao),
    (WuHorse, Chen),
    (Wei, Si),
    (Shen, WuHorse),
    (You, Wei),
    (Xu, Shen),
    (Hai, You),
];

/// 天狗：以年支查
pub const TIANGOU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Xu),
    (Chou, Hai),
    (Yin, Zi),
    (Mao, Chou),
    (Chen, Yin),
    (Si, Mao),
    (WuHorse, Chen),
    (Wei, Si),
    (Shen, WuHorse),
    (You, Wei),
    (Xu, Shen),
    (Hai, You),
];

/// 沐浴：以日干查十二長生的沐浴位
pub const MUYU: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Zi),
    (Yi, Si),
    (Bing, Mao),
    (Ding, Shen),
    (Wu, Mao),
    (Ji, Shen),
    (Geng, WuHorse),
    (Xin, Hai),
    (Ren, You),
    (Gui, Yin),
];

/// 隔角：以年支查，地支相隔兩位
pub const GEJIAO: [(EarthlyBranch, [EarthlyBranch; 2]); 12] = [
    (Zi, [Yin, Xu]),
    (Chou, [Mao, Hai]),
    (Yin, [Chen, Zi]),
    (Mao, [Si, Chou]),
    (Chen, [WuHorse, Yin]),
    (Si, [Wei, Mao]),
    (WuHorse, [Shen, Chen]),
    (Wei, [You, Si]),
    (Shen, [Xu, WuHorse]),
    (You, [Hai, Wei]),
    (Xu, [Zi, Shen]),
    (Hai, [Chou, You]),
];

/// 元辰：陽年男命/陰年女命
pub const YUANCHEN_YANG: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Zi, Wei),
    (Yin, You),
    (Chen, Hai),
    (WuHorse, Chou),
    (Shen, Mao),
    (Xu, Si),
];

/// 元辰：陰年男命/陽年女命
pub const YUANCHEN_YIN: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Chou, WuHorse),
    (Mao, Shen),
    (Si, Xu),
    (Wei, Zi),
    (You, Yin),
    (Hai, Chen),
];

/// 玉堂貴人：以日干查
pub const YUTANG: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Chen),
    (Yi, Mao),
    (Bing, Yin),
    (Ding, Hai),
    (Wu, Yin),
    (Ji, Hai),
    (Geng, Shen),
    (Xin, You),
    (Ren, Xu),
    (Gui, Wei),
];

/// 文曲貴人：以日干查
pub const WENQU: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Si),
    (Yi, WuHorse),
    (Bing, Shen),
    (Ding, You),
    (Wu, Shen),
    (Ji, You),
    (Geng, Hai),
    (Xin, Zi),
    (Ren, Yin),
    (Gui, Mao),
];

/// 喪門：以年支查
pub const SANGMEN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Yin),
    (Chou, Mao),
    (Yin, Chen),
    (Mao, Si),
    (Chen, WuHorse),
    (Si, Wei),
    (WuHorse, Shen),
    (Wei, You),
    (Shen, Xu),
    (You, Hai),
    (Xu, Zi),
    (Hai, Chou),
];

/// 披麻：以年支查
pub const PIMA: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Hai),
    (Chou, Zi),
    (Yin, Chou),
    (Mao, Yin),
    (Chen, Mao),
    (Si, Chen),
    (WuHorse, Si),
    (Wei, WuHorse),
    (Shen, Wei),
    (You, Shen),
    (Xu, You),
    (Hai, Xu),
];

/// 白虎：以年支查
pub const BAIHU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Shen),
    (Chou, You),
    (Yin, Xu),
    (Mao, Hai),
    (Chen, Zi),
    (Si, Chou),
    (WuHorse, Yin),
    (Wei, Mao),
    (Shen, Chen),
    (You, Si),
    (Xu, WuHorse),
    (Hai, Wei),
];

/// 官符：以年支查
pub const GUANFU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Mao),
    (Chou, Chen),
    (Yin, Si),
    (Mao, WuHorse),
    (Chen, Wei),
    (Si, Shen),
    (WuHorse, You),
    (Wei, Xu),
    (Shen, Hai),
    (You, Zi),
    (Xu, Chou),
    (Hai, Yin),
];

/// 五鬼：以年支查
pub const WUGUI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Chen),
    (Chou, Si),
    (Yin, WuHorse),
    (Mao, Wei),
    (Chen, Shen),
    (Si, You),
    (WuHorse, Xu),
    (Wei, Hai),
    (Shen, Zi),
    (You, Chou),
    (Xu, Yin),
    (Hai, Mao),
];

/// 死符：以年支查
pub const SIFU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, WuHorse),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, You),
    (Si, Xu),
    (WuHorse, Hai),
    (Wei, Zi),
    (Shen, Chou),
    (You, Yin),
    (Xu, Mao),
    (Hai, Chen),
];

/// 龍德：以月支查
pub const LONGDE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Yin, Hai),
    (Mao, Zi),
    (Chen, Chou),
    (Si, Yin),
    (WuHorse, Mao),
    (Wei, Chen),
    (Shen, Si),
    (You, WuHorse),
    (Xu, Wei),
    (Hai, Shen),
    (Zi, You),
    (Chou, Xu),
];

/// 孤鸞煞：特定日柱組合
pub const GULUAN: [(HeavenlyStem, EarthlyBranch); 9] = [
    (Yi, Si),
    (Ding, Si),
    (Xin, Hai),
    (Wu, Shen),
    (Ren, Yin),
    (Wu, WuHorse),
    (Ren, Zi),
    (Bing, WuHorse),
    (Bing, Zi),
];

/// 天元坐煞：特定日柱組合
pub const TIANYUAN_ZUOSHA: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Shen),
    (Yi, You),
    (Bing, Zi),
    (Ding, Hai),
    (Wu, Yin),
    (Ji, Mao),
    (Geng, WuHorse),
    (Xin, Si),
    (Ren, Shen),
    (Gui, You),
];

/// 金神：特定時柱組合
pub const JINSHEN: [(HeavenlyStem, EarthlyBranch); 3] = [(Yi, Chou), (Ji, Si), (Gui, You)];

/// 三刑：恃勢之刑、無恩之刑、無禮之刑
pub const SANXING_YIN_SI_SHEN: [EarthlyBranch; 3] = [Yin, Si, Shen];
pub const SANXING_CHOU_XU_WEI: [EarthlyBranch; 3] = [Chou, Xu, Wei];
pub const SANXING_ZI_MAO: [EarthlyBranch; 2] = [Zi, Mao];

/// 自刑地支
pub const ZIXING: [EarthlyBranch; 4] = [Chen, WuHorse, You, Hai];

/// 六害：地支相害
pub const LIUHAI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Wei),
    (Chou, WuHorse),
    (Yin, Si),
    (Mao, Chen),
    (Shen, Hai),
    (You, Xu),
    (Wei, Zi),
    (WuHorse, Chou),
    (Si, Yin),
    (Chen, Mao),
    (Hai, Shen),
    (Xu, You),
];

/// 貫索：以年支查
pub const GUANSUO: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Chou),
    (Chou, Yin),
    (Yin, Mao),
    (Mao, Chen),
    (Chen, Si),
    (Si, WuHorse),
    (WuHorse, Wei),
    (Wei, Shen),
    (Shen, You),
    (You, Xu),
    (Xu, Hai),
    (Hai, Zi),
];

/// 飛廉：以年支查
pub const FEILIAN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, You),
    (Chou, Xu),
    (Yin, Hai),
    (Mao, Zi),
    (Chen, Chou),
    (Si, Yin),
    (WuHorse, Mao),
    (Wei, Chen),
    (Shen, Si),
    (You, WuHorse),
    (Xu, Wei),
    (Hai, Shen),
];

/// 羅睺：以年支查
pub const LUOHOU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, WuHorse),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, You),
    (Si, Xu),
    (WuHorse, Hai),
    (Wei, Zi),
    (Shen, Chou),
    (You, Yin),
    (Xu, Mao),
    (Hai, Chen),
];

/// 計都：以年支查
pub const JIDU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Hai),
    (Chou, Zi),
    (Yin, Chou),
    (Mao, Yin),
    (Chen, Mao),
    (Si, Chen),
    (WuHorse, Si),
    (Wei, WuHorse),
    (Shen, Wei),
    (You, Shen),
    (Xu, You),
    (Hai, Xu),
];

/// 天哭：以年支查
pub const TIANKU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Xu),
    (Chou, Hai),
    (Yin, Zi),
    (Mao, Chou),
    (Chen, Yin),
    (Si, Mao),
    (WuHorse, Chen),
    (Wei, Si),
    (Shen, WuHorse),
    (You, Wei),
    (Xu, Shen),
    (Hai, You),
];

/// 天虛：以年支查
pub const TIANXU: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Wei),
    (Chou, Shen),
    (Yin, You),
    (Mao, Xu),
    (Chen, Hai),
    (Si, Zi),
    (WuHorse, Chou),
    (Wei, Yin),
    (Shen, Mao),
    (You, Chen),
    (Xu, Si),
    (Hai, WuHorse),
];

/// 紫微：以年支查
pub const ZIWEI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Mao),
    (Chou, Yin),
    (Yin, Chou),
    (Mao, Zi),
    (Chen, Hai),
    (Si, Xu),
    (WuHorse, You),
    (Wei, Shen),
    (Shen, Wei),
    (You, WuHorse),
    (Xu, Si),
    (Hai, Chen),
];

/// 鳳閣：以月支查
pub const FENGGE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Yin, Si),
    (Mao, WuHorse),
    (Chen, Wei),
    (Si, Shen),
    (WuHorse, You),
    (Wei, Xu),
    (Shen, Hai),
    (You, Zi),
    (Xu, Chou),
    (Hai, Yin),
    (Zi, Mao),
    (Chou, Chen),
];

/// 月將：以月支查
pub const YUEJIANG: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Yin, You),
    (Mao, Xu),
    (Chen, Hai),
    (Si, Zi),
    (WuHorse, Chou),
    (Wei, Yin),
    (Shen, Mao),
    (You, Chen),
    (Xu, Si),
    (Hai, WuHorse),
    (Zi, Wei),
    (Chou, Shen),
];

/// 豹尾：歲破後兩位
pub const BAOWEI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Shen),
    (Chou, You),
    (Yin, Xu),
    (Mao, Hai),
    (Chen, Zi),
    (Si, Chou),
    (WuHorse, Yin),
    (Wei, Mao),
    (Shen, Chen),
    (You, Si),
    (Xu, WuHorse),
    (Hai, Wei),
];

/// 黃幡：以年支查
pub const HUANGFAN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Wei),
    (Chou, Shen),
    (Yin, You),
    (Mao, Xu),
    (Chen, Hai),
    (Si, Zi),
    (WuHorse, Chou),
    (Wei, Yin),
    (Shen, Mao),
    (You, Chen),
    (Xu, Si),
    (Hai, WuHorse),
];

/// 鐵掃帚：以月支查（男命表）
pub const TIESAZHOU_MALE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Shen),
    (Chou, You),
    (Yin, Xu),
    (Mao, Hai),
    (Chen, Zi),
    (Si, Chou),
    (WuHorse, Yin),
    (Wei, Mao),
    (Shen, Chen),
    (You, Si),
    (Xu, WuHorse),
    (Hai, Wei),
];

/// 九醜：特定日柱組合
pub const JIUCHOU: [(HeavenlyStem, EarthlyBranch); 7] = [
    (Geng, Xu),
    (Xin, Hai),
    (Ren, Yin),
    (Gui, Si),
    (Ding, Chou),
    (Wu, Zi),
    (Ji, Mao),
];

/// 闌干：以年支查
pub const LANGAN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Mao),
    (Chou, Chen),
    (Yin, Si),
    (Mao, WuHorse),
    (Chen, Wei),
    (Si, Shen),
    (WuHorse, You),
    (Wei, Xu),
    (Shen, Hai),
    (You, Zi),
    (Xu, Chou),
    (Hai, Yin),
];

/// 暴敗：以日柱查
pub const BAOBAI: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Chen),
    (Yi, Si),
    (Bing, Shen),
    (Ding, Hai),
    (Wu, Xu),
    (Ji, Chou),
    (Geng, Chen),
    (Xin, Si),
    (Ren, Shen),
    (Gui, Hai),
];

/// 浮沉：以年支查
pub const FUCHEN: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, WuHorse),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, You),
    (Si, Xu),
    (WuHorse, Hai),
    (Wei, Zi),
    (Shen, Chou),
    (You, Yin),
    (Xu, Mao),
    (Hai, Chen),
];

/// 指背：以年支查
pub const ZHIBEI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, WuHorse),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, You),
    (Si, Xu),
    (WuHorse, Hai),
    (Wei, Zi),
    (Shen, Chou),
    (You, Yin),
    (Xu, Mao),
    (Hai, Chen),
];

/// 捲舌：以年支查
pub const JUANSHE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Xu),
    (Chou, Hai),
    (Yin, Zi),
    (Mao, Chou),
    (Chen, Yin),
    (Si, Mao),
    (WuHorse, Chen),
    (Wei, Si),
    (Shen, WuHorse),
    (You, Wei),
    (Xu, Shen),
    (Hai, You),
];

/// 伏屍：以年支查
pub const FUSHI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Hai),
    (Chou, Zi),
    (Yin, Chou),
    (Mao, Yin),
    (Chen, Mao),
    (Si, Chen),
    (WuHorse, Si),
    (Wei, WuHorse),
    (Shen, Wei),
    (You, Shen),
    (Xu, You),
    (Hai, Xu),
];

/// 吞陷煞：以日干查
pub const TUNXIAN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Chen),
    (Yi, Chen),
    (Bing, Xu),
    (Ding, Xu),
    (Wu, Chen),
    (Ji, Chen),
    (Geng, Xu),
    (Xin, Xu),
    (Ren, Chen),
    (Gui, Chen),
];

/// 破碎煞：以年支查
pub const POSUI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, Chen),
    (Yin, You),
    (Mao, Zi),
    (Chen, You),
    (Si, Shen),
    (WuHorse, You),
    (Wei, Xu),
    (Shen, Si),
    (You, Zi),
    (Xu, Wei),
    (Hai, Yin),
];

/// 往亡：以日支查
pub const WANGWANG: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Si),
    (Chou, WuHorse),
    (Yin, Wei),
    (Mao, Shen),
    (Chen, You),
    (Si, Xu),
    (WuHorse, Hai),
    (Wei, Zi),
    (Shen, Chou),
    (You, Yin),
    (Xu, Mao),
    (Hai, Chen),
];

/// 歸忌：以日支查
pub const GUIJI: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Wei),
    (Chou, Shen),
    (Yin, You),
    (Mao, Xu),
    (Chen, Hai),
    (Si, Zi),
    (WuHorse, Chou),
    (Wei, Yin),
    (Shen, Mao),
    (You, Chen),
    (Xu, Si),
    (Hai, WuHorse),
];

/// 天火：以日干查
pub const TIANHUO: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Zi),
    (Yi, Mao),
    (Bing, WuHorse),
    (Ding, You),
    (Wu, Zi),
    (Ji, Mao),
    (Geng, WuHorse),
    (Xin, You),
    (Ren, Zi),
    (Gui, Mao),
];

/// 劍鋒煞：以日干查
pub const JIANFENG: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, You),
    (Yi, Xu),
    (Bing, Zi),
    (Ding, Chou),
    (Wu, Mao),
    (Ji, Chen),
    (Geng, WuHorse),
    (Xin, Wei),
    (Ren, You),
    (Gui, Xu),
];

/// 懸針煞：特定日柱組合
pub const XUANZHEN: [(HeavenlyStem, EarthlyBranch); 10] = [
    (Jia, Yin),
    (Yi, Mao),
    (Bing, WuHorse),
    (Ding, Si),
    (Wu, Xu),
    (Ji, Wei),
    (Geng, Shen),
    (Xin, You),
    (Ren, Zi),
    (Gui, Hai),
];

/// 平頭煞：特定日柱組合
pub const PINGTOU: [(HeavenlyStem, EarthlyBranch); 20] = [
    (Jia, Shen),
    (Jia, Xu),
    (Yi, You),
    (Yi, Hai),
    (Bing, Zi),
    (Bing, Yin),
    (Ding, Chou),
    (Ding, Mao),
    (Wu, Chen),
    (Wu, WuHorse),
    (Ji, Si),
    (Ji, Wei),
    (Geng, WuHorse),
    (Geng, Shen),
    (Xin, Wei),
    (Xin, You),
    (Ren, Shen),
    (Ren, Xu),
    (Gui, You),
    (Gui, Hai),
];

/// 六厄：以年支查
pub const LIUE: [(EarthlyBranch, EarthlyBranch); 12] = [
    (Zi, Mao),
    (Chou, Chen),
    (Yin, Si),
    (Mao, WuHorse),
    (Chen, Wei),
    (Si, Shen),
    (WuHorse, You),
    (Wei, Xu),
    (Shen, Hai),
    (You, Zi),
    (Xu, Chou),
    (Hai, Yin),
];

/// 歲刑：以年支查
pub const SUIXING: [(EarthlyBranch, &[EarthlyBranch]); 12] = [
    (Zi, &[Mao]),
    (Chou, &[Xu, Wei]),
    (Yin, &[Si, Shen]),
    (Mao, &[Zi]),
    (Chen, &[Chen]),
    (Si, &[Yin, Shen]),
    (WuHorse, &[WuHorse]),
    (Wei, &[Chou, Xu]),
    (Shen, &[Yin, Si]),
    (You, &[You]),
    (Xu, &[Chou, Wei]),
    (Hai, &[Hai]),
];

/// 四廢：季節日柱（該季無氣之干支）
pub const SIFEI_SPRING: [(HeavenlyStem, EarthlyBranch); 2] = [(Geng, Shen), (Xin, You)];
pub const SIFEI_SUMMER: [(HeavenlyStem, EarthlyBranch); 2] = [(Ren, Zi), (Gui, Hai)];
pub const SIFEI_AUTUMN: [(HeavenlyStem, EarthlyBranch); 2] = [(Jia, Yin), (Yi, Mao)];
pub const SIFEI_WINTER: [(HeavenlyStem, EarthlyBranch); 2] = [(Bing, WuHorse), (Ding, Si)];
