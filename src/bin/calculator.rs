// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

fn main() -> eframe::Result<()> {
    bmikit::app::run_calculator()
}
