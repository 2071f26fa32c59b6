//! Tick packets read back out of a CSV recording.
//!
//! One row per tick. Columns are looked up by header name, so column order
//! doesn't matter and unknown columns are ignored. Rotation, angular velocity
//! and pad columns are optional; everything else must be present.

use anyhow::{anyhow, bail, Context, Result};
use common::{
    halfway_house::{
        BallInfo, BoostPadState, GameInfo, LiveDataPacket, Physics, PlayerInfo, Rotator, Vector3,
    },
    rl,
};
use std::{fs::File, io, path::Path, str::FromStr};

/// More than this is probably a malformed header, not a real match.
const MAX_PLAYERS: usize = 8;

pub struct Recording<R> {
    reader: csv::Reader<R>,
    columns: Columns,
}

impl Recording<File> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open recording {}", path.display()))?;
        Self::from_reader(file)
    }
}

impl<R: io::Read> Recording<R> {
    pub fn from_reader(rdr: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(rdr);
        let headers = reader
            .headers()
            .context("could not read the header row")?
            .clone();
        let columns = Columns::new(&headers)?;
        Ok(Self { reader, columns })
    }

    pub fn num_players(&self) -> usize {
        self.columns.players.len()
    }

    pub fn packets(&mut self) -> impl Iterator<Item = Result<LiveDataPacket>> + '_ {
        let columns = &self.columns;
        self.reader
            .records()
            .enumerate()
            .map(move |(i, record)| {
                // Line 1 is the header.
                let number = i + 2;
                let record = record.with_context(|| format!("could not read row {}", number))?;
                columns.packet(&Row {
                    record: &record,
                    number,
                })
            })
    }
}

struct Column {
    name: String,
    index: usize,
}

impl Column {
    fn find(headers: &csv::StringRecord, name: &str) -> Option<Self> {
        headers.iter().position(|h| h == name).map(|index| Self {
            name: name.to_string(),
            index,
        })
    }

    fn require(headers: &csv::StringRecord, name: &str) -> Result<Self> {
        Self::find(headers, name).ok_or_else(|| anyhow!("recording has no {:?} column", name))
    }
}

macro_rules! vector_columns {
    ($headers:expr, $prefix:expr, $suffixes:expr) => {{
        let [x, y, z] = $suffixes;
        [
            Column::require($headers, &format!("{}_{}", $prefix, x))?,
            Column::require($headers, &format!("{}_{}", $prefix, y))?,
            Column::require($headers, &format!("{}_{}", $prefix, z))?,
        ]
    }};
}

const XYZ: [&str; 3] = ["x", "y", "z"];

struct PhysicsColumns {
    loc: [Column; 3],
    rot: Option<[Column; 3]>,
    vel: [Column; 3],
    ang_vel: Option<[Column; 3]>,
}

impl PhysicsColumns {
    fn new(headers: &csv::StringRecord, prefix: &str) -> Result<Self> {
        let rot = if Column::find(headers, &format!("{}_pitch", prefix)).is_some() {
            Some(vector_columns!(headers, prefix, ["pitch", "yaw", "roll"]))
        } else {
            None
        };
        let ang_vel = if Column::find(headers, &format!("{}_ang_x", prefix)).is_some() {
            Some(vector_columns!(
                headers,
                format!("{}_ang", prefix),
                XYZ
            ))
        } else {
            None
        };
        Ok(Self {
            loc: vector_columns!(headers, format!("{}_loc", prefix), XYZ),
            rot,
            vel: vector_columns!(headers, format!("{}_vel", prefix), XYZ),
            ang_vel,
        })
    }

    fn physics(&self, row: &Row<'_>) -> Result<Physics> {
        let rotation = match &self.rot {
            Some([pitch, yaw, roll]) => Rotator {
                Pitch: row.parse(pitch)?,
                Yaw: row.parse(yaw)?,
                Roll: row.parse(roll)?,
            },
            None => Rotator::default(),
        };
        let angular_velocity = match &self.ang_vel {
            Some(columns) => row.vector(columns)?,
            None => Vector3::default(),
        };
        Ok(Physics {
            Location: row.vector(&self.loc)?,
            Rotation: rotation,
            Velocity: row.vector(&self.vel)?,
            AngularVelocity: angular_velocity,
        })
    }
}

struct PlayerColumns {
    physics: PhysicsColumns,
    boost: Column,
    team: Column,
}

impl PlayerColumns {
    fn new(headers: &csv::StringRecord, index: usize) -> Result<Self> {
        let prefix = format!("player{}", index);
        Ok(Self {
            physics: PhysicsColumns::new(headers, &prefix)?,
            boost: Column::require(headers, &format!("{}_boost", prefix))?,
            team: Column::require(headers, &format!("{}_team", prefix))?,
        })
    }

    fn player(&self, row: &Row<'_>) -> Result<PlayerInfo> {
        let team: u8 = row.parse(&self.team)?;
        if team > 1 {
            bail!(
                "team must be 0 or 1, got {} in column {}, row {}",
                team,
                self.team.name,
                row.number,
            );
        }
        let boost: f32 = row.parse(&self.boost)?;
        let physics = self.physics.physics(row)?;
        Ok(PlayerInfo {
            Physics: physics,
            // Recordings carry no contact info. Cars resting near the floor
            // are as good as grounded.
            OnGround: physics.Location.Z < rl::OCTANE_NEUTRAL_Z + 5.0,
            Team: team,
            Boost: boost.round().max(0.0).min(rl::BOOST_MAX) as i32,
            ..Default::default()
        })
    }
}

struct Columns {
    time: Column,
    round_active: Column,
    kickoff_pause: Column,
    ball: PhysicsColumns,
    players: Vec<PlayerColumns>,
    /// One per standard pad; `None` means always active.
    pads: Vec<Option<Column>>,
}

impl Columns {
    fn new(headers: &csv::StringRecord) -> Result<Self> {
        let mut players = Vec::new();
        while Column::find(headers, &format!("player{}_loc_x", players.len())).is_some() {
            if players.len() == MAX_PLAYERS {
                bail!("recording has more than {} players", MAX_PLAYERS);
            }
            players.push(PlayerColumns::new(headers, players.len())?);
        }
        if players.is_empty() {
            bail!("recording has no players (expected a \"player0_loc_x\" column)");
        }

        let pads = (0..rl::SOCCAR_BOOST_PADS.len())
            .map(|i| Column::find(headers, &format!("pad{}_active", i)))
            .collect();

        Ok(Self {
            time: Column::require(headers, "time")?,
            round_active: Column::require(headers, "round_active")?,
            kickoff_pause: Column::require(headers, "kickoff_pause")?,
            ball: PhysicsColumns::new(headers, "ball")?,
            players,
            pads,
        })
    }

    fn packet(&self, row: &Row<'_>) -> Result<LiveDataPacket> {
        Ok(LiveDataPacket {
            GameCars: self
                .players
                .iter()
                .map(|player| player.player(row))
                .collect::<Result<_>>()?,
            GameBall: BallInfo {
                Physics: self.ball.physics(row)?,
            },
            GameInfo: GameInfo {
                TimeSeconds: row.parse(&self.time)?,
                RoundActive: row.flag(&self.round_active)?,
                KickoffPause: row.flag(&self.kickoff_pause)?,
                MatchEnded: false,
            },
            BoostPadStates: self
                .pads
                .iter()
                .map(|column| -> Result<BoostPadState> {
                    let active = match column {
                        Some(column) => row.flag(column)?,
                        None => true,
                    };
                    Ok(BoostPadState {
                        IsActive: active,
                        Timer: 0.0,
                    })
                })
                .collect::<Result<_>>()?,
        })
    }
}

struct Row<'a> {
    record: &'a csv::StringRecord,
    /// Line number in the file, for error messages.
    number: usize,
}

impl Row<'_> {
    fn cell(&self, column: &Column) -> Result<&str> {
        self.record
            .get(column.index)
            .map(str::trim)
            .ok_or_else(|| anyhow!("row {} is missing column {}", self.number, column.name))
    }

    fn parse<T>(&self, column: &Column) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let cell = self.cell(column)?;
        cell.parse().with_context(|| {
            format!(
                "bad value {:?} in column {}, row {}",
                cell, column.name, self.number,
            )
        })
    }

    fn flag(&self, column: &Column) -> Result<bool> {
        match self.cell(column)? {
            "1" | "true" | "True" => Ok(true),
            "0" | "false" | "False" => Ok(false),
            cell => bail!(
                "bad flag {:?} in column {}, row {}",
                cell,
                column.name,
                self.number,
            ),
        }
    }

    fn vector(&self, [x, y, z]: &[Column; 3]) -> Result<Vector3> {
        Ok(Vector3::new(self.parse(x)?, self.parse(y)?, self.parse(z)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::recording::Recording;

    const HEADER: &str = "time,round_active,kickoff_pause,\
        ball_loc_x,ball_loc_y,ball_loc_z,ball_vel_x,ball_vel_y,ball_vel_z,\
        player0_loc_x,player0_loc_y,player0_loc_z,player0_pitch,player0_yaw,player0_roll,\
        player0_vel_x,player0_vel_y,player0_vel_z,player0_ang_x,player0_ang_y,player0_ang_z,\
        player0_boost,player0_team,\
        player1_loc_x,player1_loc_y,player1_loc_z,player1_vel_x,player1_vel_y,player1_vel_z,\
        player1_boost,player1_team,pad3_active";

    fn recording(rows: &[&str]) -> String {
        let mut csv = HEADER.to_string();
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv
    }

    const KICKOFF_ROW: &str = "1.5,1,1,0,0,92.74,0,0,0,\
        0,-4608,17.01,0,1.5708,0,0,0,0,0,0,0,33,0,\
        0,4608,17.01,0,0,0,33,1,0";

    #[test]
    fn reads_a_tick() {
        let csv = recording(&[KICKOFF_ROW]);
        let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(recording.num_players(), 2);

        let packets: Vec<_> = recording.packets().collect::<Result<_, _>>().unwrap();
        assert_eq!(packets.len(), 1);
        let packet = &packets[0];
        assert_eq!(packet.GameInfo.TimeSeconds, 1.5);
        assert!(packet.GameInfo.RoundActive);
        assert!(packet.GameInfo.KickoffPause);
        assert_eq!(packet.num_cars(), 2);
        assert_eq!(packet.GameCars[0].Physics.Location.Y, -4608.0);
        assert_eq!(packet.GameCars[0].Physics.Rotation.Yaw, 1.5708);
        assert_eq!(packet.GameCars[0].Boost, 33);
        assert!(packet.GameCars[0].OnGround);
        assert_eq!(packet.GameCars[1].Team, 1);
        assert_eq!(packet.BoostPadStates.len(), 34);
        assert!(!packet.BoostPadStates[3].IsActive);
        assert!(packet.BoostPadStates[4].IsActive);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "time,round_active\n1.0,1";
        let err = Recording::from_reader(csv.as_bytes()).err().unwrap();
        assert!(err.to_string().contains("player0_loc_x"), "{}", err);
    }

    #[test]
    fn bad_cell_names_column_and_row() {
        let bad = KICKOFF_ROW.replacen("1.5", "soon", 1);
        let csv = recording(&[KICKOFF_ROW, &bad]);
        let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();
        let results: Vec<_> = recording.packets().collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().err().unwrap().to_string();
        assert!(err.contains("time"), "{}", err);
        assert!(err.contains("row 3"), "{}", err);
    }

    #[test]
    fn bad_team_is_rejected() {
        let bad = KICKOFF_ROW.replace(",33,1,0", ",33,7,0");
        let csv = recording(&[&bad]);
        let mut recording = Recording::from_reader(csv.as_bytes()).unwrap();
        let err = recording.packets().next().unwrap().err().unwrap();
        assert!(err.to_string().contains("team"), "{}", err);
    }
}
