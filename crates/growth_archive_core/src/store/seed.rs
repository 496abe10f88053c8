//! Built-in archive content.
//!
//! Static data baked into the build. Nothing here is read from or written to
//! disk.

use crate::model::comment::{ParentComment, ReplyStatus};
use crate::model::profile::{BasicInfo, User};
use crate::model::record::{RecordItem, RecordKind, TeacherFeedback};
use crate::model::section::{Category, Section, Subcategory};

/// Presentation metadata for one home-screen tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeTile {
    pub title: String,
    pub subtitle: String,
    pub stat_label: String,
    pub target: TileTarget,
}

/// What a home tile links to; the stat is counted from the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileTarget {
    Section(String),
    TeacherMessages,
}

/// Linked context shown on the add-comment screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContext {
    pub linked_node: String,
    pub linked_subject: String,
    pub attached_photos: Vec<String>,
}

/// Every collection the catalog is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub user: User,
    pub basic_info: BasicInfo,
    pub sections: Vec<Section>,
    pub teacher_messages: Vec<RecordItem>,
    pub parent_messages: Vec<RecordItem>,
    pub parent_comments: Vec<ParentComment>,
    pub home_tiles: Vec<HomeTile>,
    pub comment_context: CommentContext,
}

impl SeedData {
    /// Returns the built-in kindergarten archive.
    pub fn builtin() -> Self {
        Self {
            user: current_user(),
            basic_info: basic_info(),
            sections: vec![growth_records(), english_course(), transition_course()],
            teacher_messages: teacher_messages(),
            parent_messages: parent_messages(),
            parent_comments: parent_comments(),
            home_tiles: home_tiles(),
            comment_context: CommentContext {
                linked_node: "第一学期总结".to_string(),
                linked_subject: "数学".to_string(),
                attached_photos: vec!["https://picsum.photos/id/20/200/200".to_string()],
            },
        }
    }
}

fn current_user() -> User {
    User {
        name: "王小明".to_string(),
        avatar: "https://i.pravatar.cc/300?img=12".to_string(),
        class_name: "中二班".to_string(),
        birth_date: Some("2019年6月15日".to_string()),
        enroll_date: Some("2022年9月1日".to_string()),
    }
}

fn basic_info() -> BasicInfo {
    BasicInfo {
        semester: "2024-2025学年 第一学期".to_string(),
        class_name: "中二班".to_string(),
        head_teacher: "李老师".to_string(),
        assistant_teacher: Some("张老师".to_string()),
    }
}

fn record(id: &str, title: &str, kind: RecordKind, date: &str, summary: &str) -> RecordItem {
    RecordItem::new(id, title, kind, date).with_summary(summary)
}

fn growth_records() -> Section {
    use RecordKind::{Activity, Artwork, Assessment, Observation};

    Section::new(
        "growth-records",
        "成长记录",
        "sprout",
        vec![
            Category::with_items(
                "language-expression",
                "语言表达",
                "message-circle",
                vec![
                    record("lang-1", "故事讲述活动", Activity, "11-25",
                        "能够完整讲述《小红帽》故事，表达清晰，情感丰富。")
                        .with_tags(&["表达清晰", "有进步"])
                        .with_score_label("表现优秀"),
                    record("lang-2", "儿歌朗诵", Activity, "11-20",
                        "能够背诵并朗诵3首儿歌，发音准确，节奏感好。")
                        .with_tags(&["发音准确"])
                        .with_score_label("表现良好"),
                    record("lang-3", "日常对话观察", Observation, "11-15",
                        "主动与老师分享周末经历，能使用完整句子描述事件。")
                        .with_tags(&["主动表达"]),
                ],
            ),
            Category::with_items(
                "social-skills",
                "社交能力",
                "users",
                vec![
                    record("social-1", "合作游戏观察", Observation, "11-22",
                        "在积木区与同伴合作搭建城堡，能够协商分工，遇到冲突时能寻求老师帮助。")
                        .with_tags(&["合作意识", "有进步"])
                        .with_score_label("表现良好"),
                    record("social-2", "分享活动", Activity, "11-18",
                        "主动将自己的玩具分享给新来的小朋友，表现出同理心。")
                        .with_tags(&["乐于分享"]),
                ],
            ),
            Category::with_items(
                "handicraft",
                "手工创作",
                "palette",
                vec![
                    record("craft-1", "秋叶拼贴画", Artwork, "11-20",
                        "使用收集的落叶创作了一幅小动物拼贴画，创意独特，色彩搭配和谐。")
                        .with_tags(&["创意丰富", "作品展示"])
                        .with_image("https://picsum.photos/id/28/200/200"),
                    record("craft-2", "黏土小动物", Artwork, "11-12",
                        "独立完成小兔子黏土作品，细节处理较好。")
                        .with_tags(&["动手能力强"])
                        .with_image("https://picsum.photos/id/29/200/200"),
                ],
            ),
            Category::with_items(
                "outdoor-activities",
                "户外活动",
                "sun",
                vec![
                    record("outdoor-1", "晨间运动", Activity, "11-24",
                        "积极参与早操活动，动作协调，能跟上节奏。")
                        .with_tags(&["积极参与"])
                        .with_score_label("表现良好"),
                    record("outdoor-2", "秋游活动", Activity, "11-08",
                        "参加植物园秋游，对自然观察兴趣浓厚，能识别多种常见植物。")
                        .with_tags(&["好奇心强", "精彩瞬间"])
                        .with_image("https://picsum.photos/id/30/200/200"),
                ],
            ),
            Category::with_subcategories(
                "development-assessment",
                "幼儿成长测评",
                "clipboard-check",
                vec![
                    Subcategory::new("cognitive-dev", "认知发展", vec![
                        record("cog-1", "认知能力月评", Assessment, "11-01",
                            "能够识别基本颜色和形状，数数能力达到20以内，分类能力良好。")
                            .with_score_label("发展良好")
                            .with_tags(&["月度测评"]),
                    ]),
                    Subcategory::new("emotional-management", "情绪管理", vec![
                        record("emo-1", "情绪发展观察", Observation, "11-15",
                            "能够识别并表达基本情绪，在遇到挫折时能够在老师引导下调整情绪。")
                            .with_score_label("发展中")
                            .with_tags(&["需关注"]),
                    ]),
                    Subcategory::new("self-care", "自理能力", vec![
                        record("care-1", "生活自理评估", Assessment, "11-10",
                            "能够独立进餐、如厕、整理个人物品，穿脱衣物需要少量帮助。")
                            .with_score_label("表现良好")
                            .with_tags(&["有进步"]),
                    ]),
                    Subcategory::new("behavior-habits", "行为习惯", vec![
                        record("habit-1", "日常行为观察", Observation, "11-20",
                            "能够遵守基本班级规则，排队等候有耐心，用餐习惯良好。")
                            .with_score_label("表现优秀"),
                    ]),
                    Subcategory::new("comprehensive-assessment", "综合测评结果", vec![
                        record("comp-1", "期中综合发展评估", Assessment, "11-15",
                            "整体发展良好，语言表达和社交能力突出，自理能力持续进步，建议加强精细动作练习。")
                            .with_score_label("发展良好")
                            .with_tags(&["期中测评", "综合报告"]),
                    ]),
                ],
            ),
        ],
    )
}

fn english_course() -> Section {
    use RecordKind::{Activity, Assessment};

    Section::new(
        "english-course",
        "英语课程档案",
        "globe",
        vec![
            Category::with_items(
                "english-listening",
                "英语听力",
                "headphones",
                vec![
                    record("en-listen-1", "指令听力练习", Activity, "11-22",
                        "能够听懂并执行简单英语指令，如 \"Stand up\", \"Sit down\", \"Clap your hands\"。")
                        .with_score_label("表现良好")
                        .with_tags(&["基础指令"]),
                    record("en-listen-2", "英语歌曲活动", Activity, "11-18",
                        "对英语儿歌表现出浓厚兴趣，能够跟唱简单段落。")
                        .with_tags(&["兴趣浓厚"]),
                ],
            ),
            Category::with_items(
                "english-speaking",
                "英语口语",
                "mic",
                vec![
                    record("en-speak-1", "日常问候练习", Activity, "11-20",
                        "能够主动使用 \"Good morning\", \"Hello\", \"Thank you\" 等日常用语。")
                        .with_score_label("表现优秀")
                        .with_tags(&["主动表达"]),
                    record("en-speak-2", "自我介绍", Activity, "11-12",
                        "能够用英语说出自己的名字和年龄。")
                        .with_score_label("表现良好"),
                ],
            ),
            Category::with_items(
                "word-recognition",
                "单词认读",
                "book-open",
                vec![
                    record("word-1", "颜色单词学习", Activity, "11-18",
                        "能够认读并说出 red, blue, yellow, green 四种颜色单词。")
                        .with_score_label("表现良好")
                        .with_tags(&["颜色主题"]),
                    record("word-2", "动物单词学习", Activity, "11-10",
                        "能够认读 cat, dog, fish, bird 等常见动物单词。")
                        .with_score_label("表现良好")
                        .with_tags(&["动物主题"]),
                ],
            ),
            Category::with_items(
                "story-comprehension",
                "故事理解",
                "book",
                vec![
                    record("story-1", "绘本故事课", Activity, "11-15",
                        "通过图片辅助，能够理解英语绘本《Brown Bear》的主要内容。")
                        .with_score_label("表现良好")
                        .with_tags(&["绘本阅读"]),
                ],
            ),
            Category::with_items(
                "english-unit-test",
                "单元测评",
                "file-text",
                vec![
                    record("en-test-1", "11月英语综合评估", Assessment, "11-25",
                        "听力理解良好，能认读15个常用单词，口语表达有进步，建议多练习日常对话。")
                        .with_score_label("良好")
                        .with_tags(&["月度测评"]),
                ],
            ),
        ],
    )
}

fn transition_course() -> Section {
    use RecordKind::{Activity, Assessment, Observation};

    Section::new(
        "transition-course",
        "幼小衔接课程档案",
        "graduation-cap",
        vec![
            Category::with_subcategories(
                "math-basics",
                "数学基础",
                "calculator",
                vec![
                    Subcategory::new("quantity-concept", "数量概念", vec![
                        record("math-qty-1", "数量认知练习", Activity, "11-22",
                            "能够进行1-20的点数和认读，理解多少、大小的概念。")
                            .with_score_label("掌握良好")
                            .with_tags(&["基础认知"]),
                    ]),
                    Subcategory::new("simple-calculation", "简单运算", vec![
                        record("math-calc-1", "10以内加减法", Activity, "11-20",
                            "能够理解加法和减法的含义，完成5以内的加减运算。")
                            .with_score_label("学习中")
                            .with_tags(&["运算入门"]),
                    ]),
                    Subcategory::new("shape-space", "图形空间", vec![
                        record("math-shape-1", "几何图形认知", Activity, "11-15",
                            "能够识别圆形、三角形、正方形、长方形，并能在生活中找到相应图形。")
                            .with_score_label("掌握良好")
                            .with_tags(&["图形认知"]),
                    ]),
                ],
            ),
            Category::with_subcategories(
                "reading-literacy",
                "阅读与识字",
                "book-open",
                vec![
                    Subcategory::new("pinyin-intro", "拼音启蒙", vec![
                        record("pinyin-1", "声母学习", Activity, "11-20",
                            "能够认读并发音 b, p, m, f, d, t, n, l 等声母。")
                            .with_score_label("学习中")
                            .with_tags(&["拼音基础"]),
                    ]),
                    Subcategory::new("character-recognition", "识字量", vec![
                        record("char-1", "常用字认读", Activity, "11-18",
                            "能够认读自己的姓名及20个常用汉字。")
                            .with_score_label("表现良好")
                            .with_tags(&["识字积累"]),
                    ]),
                    Subcategory::new("reading-comprehension", "阅读理解", vec![
                        record("read-1", "绘本阅读理解", Activity, "11-12",
                            "能够理解简单绘本故事的主要内容，并能回答相关问题。")
                            .with_score_label("表现良好")
                            .with_tags(&["阅读能力"]),
                    ]),
                ],
            ),
            Category::with_subcategories(
                "learning-habits",
                "学习习惯",
                "clock",
                vec![
                    Subcategory::new("focus-attention", "专注力", vec![
                        record("focus-1", "课堂专注力观察", Observation, "11-22",
                            "能够保持15分钟左右的专注听讲，完成分配的任务。")
                            .with_score_label("发展中")
                            .with_tags(&["需加强"]),
                    ]),
                    Subcategory::new("posture-writing", "坐姿书写", vec![
                        record("posture-1", "握笔姿势与坐姿", Observation, "11-18",
                            "握笔姿势基本正确，坐姿需要提醒保持，能够进行简单的描红练习。")
                            .with_score_label("学习中")
                            .with_tags(&["持续练习"]),
                    ]),
                    Subcategory::new("homework-habits", "作业习惯", vec![
                        record("homework-1", "任务完成习惯", Observation, "11-15",
                            "能够按要求完成老师布置的简单任务，开始建立责任意识。")
                            .with_score_label("表现良好"),
                    ]),
                ],
            ),
            Category::with_items(
                "transition-assessment",
                "综合衔接测评",
                "award",
                vec![
                    record("trans-test-1", "11月幼小衔接评估", Assessment, "11-25",
                        "数学基础扎实，阅读与识字进步明显，学习习惯仍需培养，建议在家多进行专注力训练。")
                        .with_score_label("发展良好")
                        .with_tags(&["月度测评", "综合报告"]),
                ],
            ),
        ],
    )
}

fn teacher_messages() -> Vec<RecordItem> {
    let midterm = "小明这学期进步很大！语言表达能力越来越强，能够主动分享自己的想法。在与小朋友相处中也更加友善。希望继续保持好奇心，在探索中快乐成长！";
    let welcome = "欢迎小明进入中二班！希望在新学期里，小明能够快乐学习，健康成长，交到更多好朋友！";
    vec![
        record("teacher-msg-1", "期中老师寄语", RecordKind::Feedback, "11-15", midterm)
            .with_tags(&["期中寄语"])
            .with_teacher_feedback(teacher_feedback("2024年11月15日", midterm)),
        record("teacher-msg-2", "开学老师寄语", RecordKind::Feedback, "09-01", welcome)
            .with_tags(&["开学寄语"])
            .with_teacher_feedback(teacher_feedback("2024年9月1日", welcome)),
    ]
}

fn teacher_feedback(date: &str, content: &str) -> TeacherFeedback {
    TeacherFeedback {
        avatar: "https://i.pravatar.cc/100?img=33".to_string(),
        name: "李老师".to_string(),
        date: date.to_string(),
        content: content.to_string(),
        audio_duration: None,
        attachment: None,
    }
}

fn parent_messages() -> Vec<RecordItem> {
    vec![
        record("parent-msg-1", "期中反馈", RecordKind::Feedback, "11-18",
            "感谢老师们的辛苦付出！小明回家经常分享在幼儿园的开心事，我们看到他的成长很欣慰。希望他能继续保持对学习的热情！")
            .with_tags(&["家长反馈"]),
        record("parent-msg-2", "周末活动分享", RecordKind::Activity, "11-10",
            "周末带小明去了科技馆，他对恐龙展览特别感兴趣，回来还画了一幅恐龙的画，想和老师小朋友们分享。")
            .with_tags(&["家园共育"])
            .with_image("https://picsum.photos/id/31/200/200"),
    ]
}

fn parent_comments() -> Vec<ParentComment> {
    vec![
        ParentComment {
            author: "妈妈".to_string(),
            avatar: "https://i.pravatar.cc/100?img=5".to_string(),
            posted_at: "2023年10月27日 09:15".to_string(),
            content: "老师您好，谢谢您的反馈。我们会多陪孩子练习这方面的题目。".to_string(),
            reply_status: ReplyStatus::Replied,
        },
        ParentComment {
            author: "爸爸".to_string(),
            avatar: "https://i.pravatar.cc/100?img=11".to_string(),
            posted_at: "2023年10月26日 21:40".to_string(),
            content: "孩子这次做得不错，有进步，继续加油！".to_string(),
            reply_status: ReplyStatus::AwaitingReply,
        },
    ]
}

fn home_tiles() -> Vec<HomeTile> {
    let tile = |title: &str, subtitle: &str, stat_label: &str, target: TileTarget| HomeTile {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        stat_label: stat_label.to_string(),
        target,
    };
    vec![
        tile("成长记录", "语言·社交·创作·活动", "本学期记录",
            TileTarget::Section("growth-records".to_string())),
        tile("英语课程档案", "听力·口语·单词·故事", "课程记录",
            TileTarget::Section("english-course".to_string())),
        tile("幼小衔接档案", "数学·阅读·学习习惯", "衔接记录",
            TileTarget::Section("transition-course".to_string())),
        tile("老师寄语", "老师的鼓励与建议", "条寄语", TileTarget::TeacherMessages),
    ]
}
