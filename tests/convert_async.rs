#[cfg(feature = "async")]
mod t {
    use fastq_rnadna::async_reader::AsyncSource;
    use fastq_rnadna::{AsyncLineReader, ConvertOptions, Direction, convert_async};
    use tempfile::tempdir;
    use tokio::fs::File;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn async_convert_plain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.fastq");
        {
            let mut f = File::create(&path).await.unwrap();
            f.write_all(b"@id\nACGTacgt\n+\n!!!!!!!!\n@id2\nT")
                .await
                .unwrap();
            f.flush().await.unwrap();
        }
        let mut fq = AsyncLineReader::from_path(&path).await.unwrap();
        assert_eq!(fq.source(), &AsyncSource::Path(path.clone()));

        let mut out = Vec::new();
        let stats = convert_async(
            &mut fq,
            &mut out,
            &ConvertOptions {
                direction: Direction::DnaToRna,
            },
        )
        .await
        .unwrap();

        assert_eq!(out, b"@id\nACGUacgu\n+\n!!!!!!!!\n@id2\nU\n");
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.sequence_lines, 2);
        assert!(stats.is_truncated());
    }

    #[tokio::test]
    async fn async_reader_assembles_long_lines() {
        let seq = "U".repeat(50_000);
        let data = format!("@r\n{seq}\n+\n#\n");
        let rdr = tokio::io::BufReader::with_capacity(64, std::io::Cursor::new(data.into_bytes()));
        let mut fq = AsyncLineReader::from_async_bufread(rdr);
        assert_eq!(fq.source(), &AsyncSource::Reader);

        let mut line = Vec::new();
        assert!(fq.read_line(&mut line).await.unwrap());
        assert_eq!(line, b"@r");
        assert!(fq.read_line(&mut line).await.unwrap());
        assert_eq!(line.len(), 50_000);
        assert!(fq.read_line(&mut line).await.unwrap());
        assert!(fq.read_line(&mut line).await.unwrap());
        assert!(!fq.read_line(&mut line).await.unwrap());
        assert!(line.is_empty());
    }

    #[tokio::test]
    async fn async_gzip_detected_by_magic() {
        use std::io::Write;

        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fq");
        let mut enc = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::fast());
        enc.write_all(b"@g\nACGU\n+\n####\n").unwrap();
        tokio::fs::write(&path, enc.finish().unwrap()).await.unwrap();

        let mut fq = AsyncLineReader::from_path(&path).await.unwrap();
        let mut out = Vec::new();
        convert_async(&mut fq, &mut out, &ConvertOptions::default())
            .await
            .unwrap();
        assert_eq!(out, b"@g\nACGT\n+\n####\n");
    }
}
