use crate::worksheet_engine::models::{Difficulty, Poem, PoemLine};

const fn line(text: &'static str, blanks: &'static [usize]) -> PoemLine {
    PoemLine { text, blanks }
}

use Difficulty::{Advanced, Basic, Intermediate};

/// Poems by tier: five-character quatrains (1), seven-character quatrains (2),
/// regulated verse and ci (3).
pub static POEMS: &[Poem] = &[
    // ── tier 1 ───────────────────────────────────────────────────────────────
    Poem {
        id: "poem-001", title: "静夜思", author: "李白", dynasty: "唐", difficulty: Basic,
        lines: &[
            line("床前明月光", &[2, 3]),
            line("疑是地上霜", &[2, 3]),
            line("举头望明月", &[3, 4]),
            line("低头思故乡", &[3, 4]),
        ],
    },
    Poem {
        id: "poem-002", title: "春晓", author: "孟浩然", dynasty: "唐", difficulty: Basic,
        lines: &[
            line("春眠不觉晓", &[0, 1]),
            line("处处闻啼鸟", &[3, 4]),
            line("夜来风雨声", &[2, 3]),
            line("花落知多少", &[0, 1]),
        ],
    },
    Poem {
        id: "poem-003", title: "登鹳雀楼", author: "王之涣", dynasty: "唐", difficulty: Basic,
        lines: &[
            line("白日依山尽", &[2, 3]),
            line("黄河入海流", &[0, 1]),
            line("欲穷千里目", &[2, 3]),
            line("更上一层楼", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-004", title: "江雪", author: "柳宗元", dynasty: "唐", difficulty: Basic,
        lines: &[
            line("千山鸟飞绝", &[0, 1]),
            line("万径人踪灭", &[0, 1]),
            line("孤舟蓑笠翁", &[0, 1]),
            line("独钓寒江雪", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-005", title: "咏鹅", author: "骆宾王", dynasty: "唐", difficulty: Basic,
        lines: &[
            line("鹅鹅鹅", &[0, 1]),
            line("曲项向天歌", &[2, 3]),
            line("白毛浮绿水", &[0, 1]),
            line("红掌拨清波", &[0, 1]),
        ],
    },
    // ── tier 2 ───────────────────────────────────────────────────────────────
    Poem {
        id: "poem-010", title: "望庐山瀑布", author: "李白", dynasty: "唐", difficulty: Intermediate,
        lines: &[
            line("日照香炉生紫烟", &[2, 3]),
            line("遥看瀑布挂前川", &[2, 3]),
            line("飞流直下三千尺", &[2, 3]),
            line("疑是银河落九天", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-011", title: "早发白帝城", author: "李白", dynasty: "唐", difficulty: Intermediate,
        lines: &[
            line("朝辞白帝彩云间", &[2, 3]),
            line("千里江陵一日还", &[0, 1]),
            line("两岸猿声啼不住", &[2, 3]),
            line("轻舟已过万重山", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-012", title: "绝句", author: "杜甫", dynasty: "唐", difficulty: Intermediate,
        lines: &[
            line("两个黄鹂鸣翠柳", &[2, 3]),
            line("一行白鹭上青天", &[2, 3]),
            line("窗含西岭千秋雪", &[2, 3]),
            line("门泊东吴万里船", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-013", title: "枫桥夜泊", author: "张继", dynasty: "唐", difficulty: Intermediate,
        lines: &[
            line("月落乌啼霜满天", &[2, 3]),
            line("江枫渔火对愁眠", &[0, 1]),
            line("姑苏城外寒山寺", &[0, 1]),
            line("夜半钟声到客船", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-014", title: "清明", author: "杜牧", dynasty: "唐", difficulty: Intermediate,
        lines: &[
            line("清明时节雨纷纷", &[2, 3]),
            line("路上行人欲断魂", &[2, 3]),
            line("借问酒家何处有", &[2, 3]),
            line("牧童遥指杏花村", &[2, 3]),
        ],
    },
    // ── tier 3 ───────────────────────────────────────────────────────────────
    Poem {
        id: "poem-020", title: "黄鹤楼", author: "崔颢", dynasty: "唐", difficulty: Advanced,
        lines: &[
            line("昔人已乘黄鹤去", &[4, 5]),
            line("此地空余黄鹤楼", &[4, 5, 6]),
            line("黄鹤一去不复返", &[0, 1]),
            line("白云千载空悠悠", &[0, 1]),
            line("晴川历历汉阳树", &[2, 3]),
            line("芳草萋萋鹦鹉洲", &[2, 3]),
            line("日暮乡关何处是", &[2, 3]),
            line("烟波江上使人愁", &[0, 1]),
        ],
    },
    Poem {
        id: "poem-021", title: "登高", author: "杜甫", dynasty: "唐", difficulty: Advanced,
        lines: &[
            line("风急天高猿啸哀", &[2, 3]),
            line("渚清沙白鸟飞回", &[0, 1]),
            line("无边落木萧萧下", &[2, 3]),
            line("不尽长江滚滚来", &[2, 3]),
            line("万里悲秋常作客", &[2, 3]),
            line("百年多病独登台", &[2, 3]),
            line("艰难苦恨繁霜鬓", &[2, 3]),
            line("潦倒新停浊酒杯", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-022", title: "锦瑟", author: "李商隐", dynasty: "唐", difficulty: Advanced,
        lines: &[
            line("锦瑟无端五十弦", &[2, 3]),
            line("一弦一柱思华年", &[2, 3]),
            line("庄生晓梦迷蝴蝶", &[2, 3]),
            line("望帝春心托杜鹃", &[2, 3]),
            line("沧海月明珠有泪", &[0, 1]),
            line("蓝田日暖玉生烟", &[0, 1]),
            line("此情可待成追忆", &[2, 3]),
            line("只是当时已惘然", &[2, 3]),
        ],
    },
    Poem {
        id: "poem-023", title: "将进酒（节选）", author: "李白", dynasty: "唐", difficulty: Advanced,
        lines: &[
            line("君不见黄河之水天上来", &[3, 4, 5]),
            line("奔流到海不复回", &[0, 1]),
            line("君不见高堂明镜悲白发", &[3, 4]),
            line("朝如青丝暮成雪", &[2, 3]),
            line("人生得意须尽欢", &[2, 3]),
            line("莫使金樽空对月", &[2, 3]),
            line("天生我材必有用", &[2, 3]),
            line("千金散尽还复来", &[0, 1]),
        ],
    },
    Poem {
        id: "poem-024", title: "水调歌头·明月几时有", author: "苏轼", dynasty: "宋", difficulty: Advanced,
        lines: &[
            line("明月几时有", &[0, 1]),
            line("把酒问青天", &[3, 4]),
            line("不知天上宫阙", &[2, 3]),
            line("今夕是何年", &[3, 4]),
            line("我欲乘风归去", &[2, 3]),
            line("又恐琼楼玉宇", &[2, 3]),
            line("高处不胜寒", &[0, 1]),
            line("起舞弄清影", &[3, 4]),
        ],
    },
];

/// All poems of one tier, in catalog order.
pub fn poems_by_difficulty(catalog: &[Poem], difficulty: Difficulty) -> Vec<&Poem> {
    catalog.iter().filter(|p| p.difficulty == difficulty).collect()
}
