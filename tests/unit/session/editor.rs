//! Tests for the editing session and commit semantics

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use spotgen::io::configuration::SPOTTED_SPECIES;
    use spotgen::render::compositor::RenderRequest;
    use spotgen::seed::codec::Seed;
    use spotgen::seed::format::FormatEra;
    use spotgen::seed::randomizer::TrainerIds;
    use spotgen::session::editor::EditingSession;
    use spotgen::session::record::{CreatureRecord, MemoryRecord};

    const IDS: TrainerIds = TrainerIds {
        tid: 0x1234,
        sid: 0x5678,
    };

    fn pid_record(pid: u32) -> MemoryRecord {
        MemoryRecord {
            pid,
            ..MemoryRecord::new(FormatEra::Pid, IDS)
        }
    }

    // Tests opening reads seed, flag, ids, and era from the record
    // Verified by reading the encryption constant in the PID era
    #[test]
    fn test_open_reads_record() {
        let mut rec = pid_record(0xAABB_CCDD);
        rec.encryption_constant = 0xFFFF_FFFF;
        let session = EditingSession::open(&rec);

        assert_eq!(session.seed(), Seed(0xAABB_CCDD));
        assert!(!session.special());
        assert_eq!(session.era(), FormatEra::Pid);
        assert_eq!(session.ids(), IDS);
        assert_eq!(session.hex_text(), "AABBCCDD");
    }

    // Tests opening a swapped-era record byte-reverses the seed
    // Verified by skipping the swap on read
    #[test]
    fn test_open_swapped_record() {
        let rec = MemoryRecord {
            pid: 0x8000_0000,
            encryption_constant: 0x1234_5678,
            ..MemoryRecord::new(FormatEra::EncryptionConstantSwapped, IDS)
        };
        assert_eq!(EditingSession::open(&rec).seed(), Seed(0x7856_3412));
    }

    // Tests malformed edits are rejected and keep the last valid seed
    // Verified by resetting the seed to zero on parse failure
    #[test]
    fn test_edit_text() {
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0x42), false);

        assert_eq!(
            session.edit_text("abc"),
            Some(RenderRequest::new(Seed(0xABC), false))
        );
        assert_eq!(session.edit_text("zz"), None);
        assert_eq!(session.edit_text(""), None);
        assert_eq!(session.edit_text("123456789"), None);
        assert_eq!(session.seed(), Seed(0xABC));
    }

    // Tests toggling the flag returns a request carrying it
    // Verified by returning the previous flag
    #[test]
    fn test_set_special() {
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(7), false);
        assert_eq!(session.set_special(true), RenderRequest::new(Seed(7), true));
        assert!(session.special());
    }

    // Tests PID-era special randomization keeps the predicate bits
    // Verified by skipping the constraint for the PID era
    #[test]
    fn test_randomize_pid_special() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0), true);

        for _ in 0..32 {
            let request = session.randomize(&mut rng);
            assert_eq!((request.seed.0 >> 3) & 0x1FFF, IDS.psv());
            assert!(request.special);
        }
    }

    // Tests later eras draw unconstrained seeds even when special
    // Verified by constraining every special randomization
    #[test]
    fn test_randomize_later_era_unconstrained() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut expected = StdRng::seed_from_u64(5);
        let mut session =
            EditingSession::detached(FormatEra::EncryptionConstant, IDS, Seed(0), true);

        for _ in 0..8 {
            assert_eq!(session.randomize(&mut rng).seed, Seed(expected.random::<u32>()));
        }
    }

    // Tests a special PID-era commit adopts the record's rewritten PID
    // Verified by keeping the pre-commit seed
    #[test]
    fn test_commit_pid_special() {
        let mut rec = pid_record(0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0xAABB_CCDD), true);

        let outcome = session.commit(&mut rec, &mut rng);

        assert!(outcome.shiny);
        assert_eq!(rec.pid, 0xAABB_444D);
        assert_eq!(outcome.seed, Seed(0xAABB_444D));
        assert_eq!(session.seed(), Seed(0xAABB_444D));
        assert_eq!(rec.encryption_constant, 0);
    }

    // Tests an ordinary PID-era commit leaves a non-shiny seed alone
    // Verified by always rewriting the PID
    #[test]
    fn test_commit_pid_ordinary_unchanged() {
        let mut rec = pid_record(0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0xAABB_CCDD), false);

        let outcome = session.commit(&mut rec, &mut rng);

        assert!(!outcome.shiny);
        assert_eq!(rec.pid, 0xAABB_CCDD);
        assert_eq!(session.seed(), Seed(0xAABB_CCDD));
    }

    // Tests an ordinary PID-era commit of a shiny seed clears the flag
    // Verified by skipping the unshiny reconcile
    #[test]
    fn test_commit_pid_clears_shiny() {
        let mut rec = pid_record(0);
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0xAABB_444D), false);

        let outcome = session.commit(&mut rec, &mut rng);

        assert!(!outcome.shiny);
        assert_eq!(outcome.seed, Seed(0xAABB_4445));
    }

    // Tests swapped-era commits store reversed bytes and keep the seed
    // Verified by storing the seed without swapping
    #[test]
    fn test_commit_swapped_era() {
        let mut rec = MemoryRecord::new(FormatEra::EncryptionConstantSwapped, IDS);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = EditingSession::detached(
            FormatEra::EncryptionConstantSwapped,
            IDS,
            Seed(0x1234_5678),
            true,
        );

        let outcome = session.commit(&mut rec, &mut rng);

        assert_eq!(rec.encryption_constant, 0x7856_3412);
        assert_ne!(rec.pid, 0);
        assert!(outcome.shiny);
        assert!(rec.is_shiny());
        assert_eq!(outcome.seed, Seed(0x1234_5678));
        assert_eq!(EditingSession::open(&rec).seed(), Seed(0x1234_5678));
    }

    // Tests an existing PID survives an encryption-constant commit
    // Verified by always drawing a new PID
    #[test]
    fn test_commit_keeps_existing_pid() {
        let mut rec = MemoryRecord {
            pid: 0x0000_0100,
            ..MemoryRecord::new(FormatEra::EncryptionConstant, TrainerIds::default())
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = EditingSession::detached(
            FormatEra::EncryptionConstant,
            TrainerIds::default(),
            Seed(0xDEAD_BEEF),
            false,
        );

        let outcome = session.commit(&mut rec, &mut rng);

        assert_eq!(rec.pid, 0x0000_0100);
        assert_eq!(rec.encryption_constant, 0xDEAD_BEEF);
        assert!(!outcome.shiny);
    }

    // Tests a special PID-era randomize commits exactly the previewed seed
    // Verified by rewriting the PID high half when setting shiny
    #[test]
    fn test_commit_keeps_previewed_constrained_seed() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..64 {
            let mut rec = pid_record(0x0102_0304);
            let mut session = EditingSession::open(&rec);
            session.set_special(true);
            let previewed = session.randomize(&mut rng).seed;

            let outcome = session.commit(&mut rec, &mut rng);

            assert!(outcome.shiny);
            assert_eq!(outcome.seed, previewed);
            assert_eq!(rec.pid, previewed.value());
        }
    }

    // Tests commits force the species, clear the nickname, and refresh the PID-era ability
    // Verified by leaving the ability slot untouched after a PID change
    #[test]
    fn test_commit_normalizes_pid_era_record() {
        let mut rec = MemoryRecord {
            species: 25,
            form: 1,
            nickname: Some("Dots".to_string()),
            ability_slot: Some(0),
            ..pid_record(0)
        };
        let mut rng = StdRng::seed_from_u64(0);
        let mut session = EditingSession::detached(FormatEra::Pid, IDS, Seed(0x0000_0001), false);

        session.commit(&mut rec, &mut rng);

        assert_eq!((rec.species, rec.form), (SPOTTED_SPECIES, 0));
        assert_eq!(rec.nickname, None);
        assert_eq!(rec.ability_slot, Some(1));
    }

    // Tests later eras reset only an invalid ability to the first slot
    // Verified by resetting every ability to slot 0
    #[test]
    fn test_commit_later_era_ability() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = EditingSession::detached(
            FormatEra::EncryptionConstant,
            IDS,
            Seed(0x0000_0001),
            false,
        );

        let mut invalid = MemoryRecord::new(FormatEra::EncryptionConstant, IDS);
        session.commit(&mut invalid, &mut rng);
        assert_eq!(invalid.ability_slot, Some(0));

        let mut valid = MemoryRecord {
            ability_slot: Some(1),
            ..MemoryRecord::new(FormatEra::EncryptionConstant, IDS)
        };
        session.commit(&mut valid, &mut rng);
        assert_eq!(valid.ability_slot, Some(1));
    }
}
