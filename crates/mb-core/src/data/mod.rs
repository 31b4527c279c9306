//! Static game data: sexes, attributes, races and classes
//!
//! These tables are the client-side copy of the server's edit files. They
//! are read-only for the lifetime of the process; the birth flow holds
//! `&'static` references into them and never mutates or frees them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::STAT_MAX;

/// Character sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const fn title(&self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Sex::Female),
            1 => Some(Sex::Male),
            _ => None,
        }
    }

    /// All sexes in menu order
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];
}

/// Core attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[repr(u8)]
pub enum Stat {
    Strength = 0,
    Intelligence = 1,
    Wisdom = 2,
    Dexterity = 3,
    Constitution = 4,
    Charisma = 5,
}

impl Stat {
    /// Short label used in tables ("STR", "INT", ...)
    pub const fn abbr(&self) -> &'static str {
        match self {
            Stat::Strength => "STR",
            Stat::Intelligence => "INT",
            Stat::Wisdom => "WIS",
            Stat::Dexterity => "DEX",
            Stat::Constitution => "CON",
            Stat::Charisma => "CHR",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Stat::Strength => "strength",
            Stat::Intelligence => "intelligence",
            Stat::Wisdom => "wisdom",
            Stat::Dexterity => "dexterity",
            Stat::Constitution => "constitution",
            Stat::Charisma => "charisma",
        }
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Stat::Strength),
            1 => Some(Stat::Intelligence),
            2 => Some(Stat::Wisdom),
            3 => Some(Stat::Dexterity),
            4 => Some(Stat::Constitution),
            5 => Some(Stat::Charisma),
            _ => None,
        }
    }

    /// All attributes in table order
    pub const ALL: [Stat; STAT_MAX] = [
        Stat::Strength,
        Stat::Intelligence,
        Stat::Wisdom,
        Stat::Dexterity,
        Stat::Constitution,
        Stat::Charisma,
    ];
}

bitflags! {
    /// Innate race traits shown in the birth detail pane
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RaceFlags: u32 {
        const SUST_STR = 0x0001;
        const SUST_CON = 0x0002;
        const HOLD_LIFE = 0x0004;
        const FREE_ACT = 0x0008;
        const REGEN = 0x0010;
        const SEE_INVIS = 0x0020;
        const PROT_BLIND = 0x0040;
        const FEATHER = 0x0080;
        const RES_POIS = 0x0100;
        const RES_LIGHT = 0x0200;
        /// Shapeshifting races: the last two classes of the table are
        /// closed to them during birth.
        const RESTRICTED = 0x8000;
    }
}

impl RaceFlags {
    /// One-line description of a single trait flag
    pub fn describe(flag: RaceFlags) -> &'static str {
        match flag {
            RaceFlags::SUST_STR => "Sustains strength",
            RaceFlags::SUST_CON => "Sustains constitution",
            RaceFlags::HOLD_LIFE => "Sustains experience",
            RaceFlags::FREE_ACT => "Resists paralysis",
            RaceFlags::REGEN => "Regenerates quickly",
            RaceFlags::SEE_INVIS => "Sees invisible creatures",
            RaceFlags::PROT_BLIND => "Resists blindness",
            RaceFlags::FEATHER => "Falls like a feather",
            RaceFlags::RES_POIS => "Resists poison",
            RaceFlags::RES_LIGHT => "Resists light damage",
            _ => "Undocumented trait",
        }
    }

    /// Flags in display order, excluding markers that carry no flavor text
    pub const DISPLAY: [RaceFlags; 10] = [
        RaceFlags::SUST_STR,
        RaceFlags::SUST_CON,
        RaceFlags::HOLD_LIFE,
        RaceFlags::FREE_ACT,
        RaceFlags::REGEN,
        RaceFlags::SEE_INVIS,
        RaceFlags::PROT_BLIND,
        RaceFlags::FEATHER,
        RaceFlags::RES_POIS,
        RaceFlags::RES_LIGHT,
    ];
}

/// Per-race or per-class skill adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillTable {
    pub melee: i16,
    pub bow: i16,
    pub throwing: i16,
    pub disarm: i16,
    pub device: i16,
    pub save: i16,
    pub stealth: i16,
    pub digging: i16,
    pub search: i16,
    pub search_freq: i16,
}

impl SkillTable {
    /// Combine race and class tables for the class detail pane
    pub fn combined(&self, other: &SkillTable) -> SkillTable {
        SkillTable {
            melee: self.melee + other.melee,
            bow: self.bow + other.bow,
            throwing: self.throwing + other.throwing,
            disarm: self.disarm + other.disarm,
            device: self.device + other.device,
            save: self.save + other.save,
            stealth: self.stealth + other.stealth,
            digging: self.digging + other.digging,
            search: self.search + other.search,
            search_freq: self.search_freq + other.search_freq,
        }
    }
}

/// One race of the static race table
#[derive(Debug, PartialEq, Eq)]
pub struct RaceDef {
    pub idx: usize,
    pub name: &'static str,
    /// Stat adjustments, indexed by `Stat`
    pub adj: [i16; STAT_MAX],
    pub skills: SkillTable,
    /// Hit die contribution
    pub hit_die: i16,
    /// Experience factor in percent
    pub exp_mod: i16,
    /// Infravision radius in multiples of 10 feet; negative means none
    pub infra: i16,
    pub flags: RaceFlags,
}

impl RaceDef {
    pub fn restricted(&self) -> bool {
        self.flags.contains(RaceFlags::RESTRICTED)
    }
}

/// One class of the static class table
#[derive(Debug, PartialEq, Eq)]
pub struct ClassDef {
    pub idx: usize,
    pub name: &'static str,
    /// Stat adjustments, indexed by `Stat`
    pub adj: [i16; STAT_MAX],
    pub skills: SkillTable,
    pub hit_die: i16,
    pub exp_mod: i16,
    /// Spell realm adjective for the detail pane, if the class casts
    pub realm: Option<&'static str>,
    /// The tail of the table holds server-internal pseudo classes that
    /// must never be offered at birth.
    pub playable: bool,
}

macro_rules! skills {
    ($melee:expr, $bow:expr, $throwing:expr, $disarm:expr, $device:expr,
     $save:expr, $stealth:expr, $digging:expr, $search:expr, $freq:expr) => {
        SkillTable {
            melee: $melee,
            bow: $bow,
            throwing: $throwing,
            disarm: $disarm,
            device: $device,
            save: $save,
            stealth: $stealth,
            digging: $digging,
            search: $search,
            search_freq: $freq,
        }
    };
}

/// The race table, in birth menu order
pub static RACES: &[RaceDef] = &[
    RaceDef {
        idx: 0,
        name: "Human",
        adj: [0, 0, 0, 0, 0, 0],
        skills: skills!(0, 0, 0, 0, 0, 0, 0, 0, 0, 10),
        hit_die: 10,
        exp_mod: 100,
        infra: -1,
        flags: RaceFlags::empty(),
    },
    RaceDef {
        idx: 1,
        name: "Half-Elf",
        adj: [-1, 1, 1, 1, -1, 1],
        skills: skills!(-1, 5, 0, 2, 3, 3, 1, 0, 6, 11),
        hit_die: 10,
        exp_mod: 110,
        infra: 2,
        flags: RaceFlags::empty(),
    },
    RaceDef {
        idx: 2,
        name: "Elf",
        adj: [-1, 2, 1, 1, -2, 1],
        skills: skills!(-5, 15, 0, 5, 6, 6, 2, 0, 8, 12),
        hit_die: 9,
        exp_mod: 120,
        infra: 3,
        flags: RaceFlags::RES_LIGHT,
    },
    RaceDef {
        idx: 3,
        name: "Hobbit",
        adj: [-2, 2, 1, 3, 2, 1],
        skills: skills!(-10, 20, 0, 15, 18, 18, 4, 0, 12, 15),
        hit_die: 7,
        exp_mod: 110,
        infra: 4,
        flags: RaceFlags::HOLD_LIFE,
    },
    RaceDef {
        idx: 4,
        name: "Gnome",
        adj: [-1, 2, 0, 2, 1, -2],
        skills: skills!(-8, 12, 0, 10, 22, 12, 3, 0, 6, 13),
        hit_die: 8,
        exp_mod: 125,
        infra: 4,
        flags: RaceFlags::FREE_ACT,
    },
    RaceDef {
        idx: 5,
        name: "Dwarf",
        adj: [2, -3, 1, -2, 2, -1],
        skills: skills!(2, 0, 0, 2, 9, 9, -1, 40, 7, 10),
        hit_die: 11,
        exp_mod: 120,
        infra: 5,
        flags: RaceFlags::PROT_BLIND,
    },
    RaceDef {
        idx: 6,
        name: "Half-Orc",
        adj: [2, -1, 0, 0, 1, -4],
        skills: skills!(3, -5, 0, -3, -3, -3, -1, 0, 0, 7),
        hit_die: 10,
        exp_mod: 110,
        infra: 3,
        flags: RaceFlags::empty(),
    },
    RaceDef {
        idx: 7,
        name: "Half-Troll",
        adj: [4, -4, -2, -4, 3, -6],
        skills: skills!(10, -10, 0, -5, -8, -8, -2, 0, -1, 5),
        hit_die: 12,
        exp_mod: 120,
        infra: 3,
        flags: RaceFlags::SUST_STR.union(RaceFlags::REGEN),
    },
    RaceDef {
        idx: 8,
        name: "Dunadan",
        adj: [1, 2, 2, 2, 3, 2],
        skills: skills!(0, 5, 0, 4, 5, 5, 1, 0, 3, 13),
        hit_die: 10,
        exp_mod: 120,
        infra: -1,
        flags: RaceFlags::SUST_CON,
    },
    RaceDef {
        idx: 9,
        name: "High-Elf",
        adj: [1, 3, -1, 3, 1, 5],
        skills: skills!(0, 15, 0, 4, 20, 20, 2, 0, 3, 14),
        hit_die: 10,
        exp_mod: 145,
        infra: 4,
        flags: RaceFlags::SEE_INVIS.union(RaceFlags::RES_LIGHT),
    },
    RaceDef {
        idx: 10,
        name: "Kobold",
        adj: [-1, -1, 0, 2, 2, -2],
        skills: skills!(-3, 10, 0, 10, 5, 0, 3, 0, 10, 15),
        hit_die: 8,
        exp_mod: 100,
        infra: 5,
        flags: RaceFlags::RES_POIS,
    },
    RaceDef {
        idx: 11,
        name: "Dragon",
        adj: [2, -1, -1, 1, 2, 1],
        skills: skills!(5, -5, 0, 0, 5, 5, 0, 30, 2, 10),
        hit_die: 11,
        exp_mod: 250,
        infra: 5,
        flags: RaceFlags::FEATHER.union(RaceFlags::RESTRICTED),
    },
];

/// The class table, in birth menu order; server pseudo classes last
pub static CLASSES: &[ClassDef] = &[
    ClassDef {
        idx: 0,
        name: "Warrior",
        adj: [5, -2, -2, 2, 2, -1],
        skills: skills!(70, 55, 45, 25, 18, 18, 1, 0, 14, 2),
        hit_die: 9,
        exp_mod: 0,
        realm: None,
        playable: true,
    },
    ClassDef {
        idx: 1,
        name: "Mage",
        adj: [-5, 3, 0, 1, -2, 1],
        skills: skills!(34, 20, 20, 30, 36, 30, 2, 0, 16, 3),
        hit_die: 0,
        exp_mod: 30,
        realm: Some("arcane"),
        playable: true,
    },
    ClassDef {
        idx: 2,
        name: "Druid",
        adj: [-2, 0, 3, -2, 0, 1],
        skills: skills!(30, 15, 32, 28, 32, 32, 3, 0, 16, 3),
        hit_die: 2,
        exp_mod: 20,
        realm: Some("nature"),
        playable: true,
    },
    ClassDef {
        idx: 3,
        name: "Priest",
        adj: [-1, -3, 3, -1, 0, 2],
        skills: skills!(45, 35, 35, 25, 30, 32, 2, 0, 16, 2),
        hit_die: 2,
        exp_mod: 20,
        realm: Some("divine"),
        playable: true,
    },
    ClassDef {
        idx: 4,
        name: "Necromancer",
        adj: [-3, 3, 0, 1, -2, -2],
        skills: skills!(30, 20, 20, 30, 36, 30, 2, 0, 16, 3),
        hit_die: 0,
        exp_mod: 30,
        realm: Some("necromantic"),
        playable: true,
    },
    ClassDef {
        idx: 5,
        name: "Paladin",
        adj: [3, -3, 1, 0, 2, 2],
        skills: skills!(65, 50, 40, 20, 24, 25, 1, 0, 12, 2),
        hit_die: 6,
        exp_mod: 35,
        realm: Some("divine"),
        playable: true,
    },
    ClassDef {
        idx: 6,
        name: "Rogue",
        adj: [2, 1, -3, 3, 1, -1],
        skills: skills!(55, 66, 60, 45, 32, 28, 5, 0, 32, 8),
        hit_die: 4,
        exp_mod: 25,
        realm: Some("arcane"),
        playable: true,
    },
    ClassDef {
        idx: 7,
        name: "Ranger",
        adj: [2, 2, 0, 1, 1, 0],
        skills: skills!(56, 72, 72, 30, 32, 28, 3, 0, 24, 5),
        hit_die: 5,
        exp_mod: 30,
        realm: Some("nature"),
        playable: true,
    },
    ClassDef {
        idx: 8,
        name: "Blackguard",
        adj: [2, 0, 0, 1, 2, -3],
        skills: skills!(60, 40, 40, 20, 24, 20, 1, 0, 10, 2),
        hit_die: 7,
        exp_mod: 35,
        realm: Some("necromantic"),
        playable: true,
    },
    ClassDef {
        idx: 9,
        name: "Monk",
        adj: [2, -1, 1, 3, 2, 1],
        skills: skills!(64, 60, 60, 34, 28, 28, 5, 0, 22, 5),
        hit_die: 6,
        exp_mod: 40,
        realm: None,
        playable: true,
    },
    ClassDef {
        idx: 10,
        name: "Shapechanger",
        adj: [2, -1, -1, 1, 2, 0],
        skills: skills!(60, 50, 50, 25, 24, 24, 2, 0, 18, 4),
        hit_die: 7,
        exp_mod: 40,
        realm: None,
        playable: true,
    },
    // Server-side placeholder for dead characters wandering as ghosts.
    ClassDef {
        idx: 11,
        name: "Ghost",
        adj: [0, 0, 0, 0, 0, 0],
        skills: skills!(0, 0, 0, 0, 0, 0, 0, 0, 0, 0),
        hit_die: 0,
        exp_mod: 100,
        realm: None,
        playable: false,
    },
];

/// Look up a race by table index
pub fn race(idx: usize) -> Option<&'static RaceDef> {
    RACES.get(idx)
}

/// Look up a class by table index
pub fn class(idx: usize) -> Option<&'static ClassDef> {
    CLASSES.get(idx)
}

/// Apply a race/class adjustment to a raw stat value.
///
/// Values above 18 move in tenth-point steps (displayed as 18/10, 18/20,
/// ...), matching how the server applies birth modifiers.
pub fn modify_stat(value: i16, amount: i16) -> i16 {
    let mut v = value;
    if amount > 0 {
        for _ in 0..amount {
            if v < 18 {
                v += 1;
            } else {
                v += 10;
            }
        }
    } else {
        for _ in 0..(-amount) {
            if v > 28 {
                v -= 10;
            } else if v > 18 {
                v = 18;
            } else if v > 3 {
                v -= 1;
            }
        }
    }
    v
}

/// Format a stat value the way the game prints it: 18/10, 18/20, ...
/// for the tenth-point range above 18.
pub fn stat_display(value: i16) -> String {
    if value > 18 {
        format!("18/{}", (value - 18) * 10)
    } else {
        value.to_string()
    }
}
