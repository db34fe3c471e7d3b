#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use core::future::pending;

use embassy_executor::Spawner;
use embassy_time::{Delay, Timer};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use log::info;
use quadbot::motion::gait_engine::GaitEngine;
use quadbot::pca9685;
use quadbot::robot::commands::MotionCommand;
use quadbot::robot::config::{ChassisProfile, PCA9685_ADDRESS};
use quadbot::robot::gaits::Gait;
use quadbot::robot::servo::Servos;
use quadbot::tasks::motion_task::{motion_task, CANCEL, MOTION_COMMANDS};

esp_bootloader_esp_idf::esp_app_desc!();

// PCA9685: SDA 21, SCL 22. Legs on S1/S2, feet on S3/S4 (outputs 8..11).

const WALK_STEP_DELAY_MS: i32 = 10;

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let p = esp_hal::init(config);

    let timer0 = TimerGroup::new(p.TIMG1);
    esp_hal_embassy::init(timer0.timer0);
    info!("Embassy initialized");

    let i2c = I2c::new(p.I2C0, I2cConfig::default().with_frequency(Rate::from_khz(100)))
        .expect("Fail creating i2c bus")
        .with_sda(p.GPIO21)
        .with_scl(p.GPIO22)
        .into_async();

    let mut delay = Delay;
    let pwm = pca9685::connect(i2c, PCA9685_ADDRESS, &mut delay)
        .await
        .expect("Fail configurating pca driver");
    let engine = GaitEngine::new(Servos::new(pwm), delay, ChassisProfile::DEFAULT)
        .with_cancel_token(&CANCEL);

    info!("Starting quadbot...");
    spawner
        .spawn(motion_task(engine, MOTION_COMMANDS.receiver()))
        .expect("Fail spawning motion task");

    let sender = MOTION_COMMANDS.sender();
    sender
        .send(MotionCommand::Walk {
            gait: Gait::Stop,
            delay_ms: WALK_STEP_DELAY_MS,
        })
        .await;
    Timer::after_millis(500).await;

    // Continuous walking is one forward cycle after another.
    for _ in 0..8 {
        sender
            .send(MotionCommand::Walk {
                gait: Gait::Forward,
                delay_ms: WALK_STEP_DELAY_MS,
            })
            .await;
    }
    Timer::after_secs(5).await;

    // Cut the running cycle short; queued cycles still play out before the stop.
    CANCEL.cancel();
    sender
        .send(MotionCommand::Walk {
            gait: Gait::Stop,
            delay_ms: WALK_STEP_DELAY_MS,
        })
        .await;

    loop {
        pending::<()>().await;
    }
}
